use std::collections::HashMap;

use gridlink_types::{ColorId, ColorState};

/// Resolves semantic button states to hardware colors.
#[derive(Debug, Clone, Default)]
pub struct ColorManager {
    colors: HashMap<ColorState, ColorId>,
}

impl ColorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color manager with the two button states registered.
    pub fn with_button_colors(on: ColorId, off: ColorId) -> Self {
        let mut manager = Self::new();
        manager.register(ColorState::ButtonOn, on);
        manager.register(ColorState::ButtonOff, off);
        manager
    }

    pub fn register(&mut self, state: ColorState, color: ColorId) {
        self.colors.insert(state, color);
    }

    /// Color for `state`. Unregistered states fall back to color 0 (dark).
    pub fn color(&self, state: ColorState) -> ColorId {
        match self.colors.get(&state) {
            Some(color) => *color,
            None => {
                log::warn!(target: "surface", "no color registered for {:?}", state);
                ColorId::default()
            }
        }
    }
}
