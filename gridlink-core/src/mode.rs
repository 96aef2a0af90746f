use gridlink_types::ModeId;

/// Holds the active track mode, if any, and the one before it.
#[derive(Debug, Clone, Default)]
pub struct ModeManager {
    active: Option<ModeId>,
    previous: Option<ModeId>,
}

impl ModeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_mode_id(&self) -> Option<ModeId> {
        self.active
    }

    pub fn previous_mode_id(&self) -> Option<ModeId> {
        self.previous
    }

    pub fn is_active(&self, mode: ModeId) -> bool {
        self.active == Some(mode)
    }

    /// Switch modes; `None` leaves no mode active.
    pub fn set_active_mode(&mut self, mode: Option<ModeId>) {
        if self.active != mode {
            self.previous = self.active;
            self.active = mode;
        }
    }

    pub fn restore_previous_mode(&mut self) {
        self.set_active_mode(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_swaps_with_previous() {
        let mut modes = ModeManager::new();
        modes.set_active_mode(Some(ModeId::new(1)));
        modes.set_active_mode(Some(ModeId::new(2)));
        modes.restore_previous_mode();
        assert_eq!(modes.active_mode_id(), Some(ModeId::new(1)));
        assert_eq!(modes.previous_mode_id(), Some(ModeId::new(2)));
    }
}
