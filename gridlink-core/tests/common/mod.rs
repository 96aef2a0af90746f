#![allow(dead_code)]
//! Test harness utilities for gridlink-core integration tests.

use gridlink_core::config::Config;
use gridlink_core::model::SessionModel;
use gridlink_core::surface::{ControlSurface, Surface};
use gridlink_types::{ButtonId, ColorId, Direction};

pub const UP: ButtonId = ButtonId::new(104);
pub const DOWN: ButtonId = ButtonId::new(105);
pub const LEFT: ButtonId = ButtonId::new(106);
pub const RIGHT: ButtonId = ButtonId::new(107);
pub const VIEW_SELECT: ButtonId = ButtonId::new(108);
pub const SOLO: ButtonId = ButtonId::new(109);
pub const MUTE: ButtonId = ButtonId::new(110);
pub const SHIFT: ButtonId = ButtonId::new(111);

/// Surface that records every LED update and notification.
#[derive(Default)]
pub struct FakeSurface {
    pub leds: Vec<(ButtonId, ColorId)>,
    pub notifications: Vec<String>,
}

impl FakeSurface {
    /// Last color sent to `button`, if any.
    pub fn led(&self, button: ButtonId) -> Option<ColorId> {
        self.leds
            .iter()
            .rev()
            .find(|(b, _)| *b == button)
            .map(|(_, c)| *c)
    }
}

impl Surface for FakeSurface {
    fn update_button(&mut self, button: ButtonId, color: ColorId) {
        self.leds.push((button, color));
    }

    fn arrow_button(&self, direction: Direction) -> ButtonId {
        match direction {
            Direction::Up => UP,
            Direction::Down => DOWN,
            Direction::Left => LEFT,
            Direction::Right => RIGHT,
        }
    }

    fn show_notification(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

pub type TestSurface = ControlSurface<FakeSurface, SessionModel>;

/// Default configuration: 32 tracks, 16 scenes, bank width 8.
pub fn make_surface() -> TestSurface {
    make_surface_with(&Config::defaults_only())
}

pub fn make_surface_with(config: &Config) -> TestSurface {
    let (tracks, scenes) = config.session_size();
    let model = SessionModel::new(tracks, scenes, config.bank_width());
    ControlSurface::from_config(config, FakeSurface::default(), model)
}

/// Press and release `button`, 10 ms apart, starting at `at`.
pub fn tap(control: &mut TestSurface, button: ButtonId, at: u64) {
    control.handle_button(button, 127, at);
    control.handle_button(button, 0, at + 10);
}
