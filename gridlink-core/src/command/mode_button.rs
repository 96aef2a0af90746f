use gridlink_types::{ButtonEvent, ModeId};

use super::{Command, CommandContext};

/// A track mode button (solo, mute, ...).
///
/// A short press toggles the mode. Holding the button past the long-press
/// threshold switches to the mode only while it is held.
pub struct ModeButtonCommand {
    mode: ModeId,
    name: String,
    momentary: bool,
}

impl ModeButtonCommand {
    pub fn new(mode: ModeId, name: impl Into<String>) -> Self {
        Self {
            mode,
            name: name.into(),
            momentary: false,
        }
    }

    pub fn mode(&self) -> ModeId {
        self.mode
    }

    fn activate(&self, ctx: &mut CommandContext<'_>) {
        ctx.modes.set_active_mode(Some(self.mode));
        ctx.notify(self.name.clone());
    }
}

impl Command for ModeButtonCommand {
    fn execute(&mut self, event: ButtonEvent, ctx: &mut CommandContext<'_>) {
        match event {
            ButtonEvent::Down => {
                self.momentary = false;
            }
            ButtonEvent::Long => {
                if !ctx.modes.is_active(self.mode) {
                    self.momentary = true;
                    self.activate(ctx);
                }
            }
            ButtonEvent::Up => {
                if self.momentary {
                    self.momentary = false;
                    ctx.modes.restore_previous_mode();
                } else if ctx.modes.is_active(self.mode) {
                    ctx.modes.set_active_mode(None);
                } else {
                    self.activate(ctx);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::test_support::Harness;

    const SOLO: u32 = 1;
    const MUTE: u32 = 2;

    fn press(command: &mut ModeButtonCommand, h: &mut Harness, long: bool) {
        command.execute(ButtonEvent::Down, &mut h.ctx());
        if long {
            command.execute(ButtonEvent::Long, &mut h.ctx());
        }
        command.execute(ButtonEvent::Up, &mut h.ctx());
    }

    #[test]
    fn short_press_toggles_mode() {
        let mut h = Harness::new();
        let mut solo = ModeButtonCommand::new(ModeId::new(SOLO), "Solo");
        press(&mut solo, &mut h, false);
        assert_eq!(h.modes.active_mode_id(), Some(ModeId::new(SOLO)));
        assert_eq!(h.notifications, vec!["Solo".to_string()]);
        press(&mut solo, &mut h, false);
        assert_eq!(h.modes.active_mode_id(), None);
    }

    #[test]
    fn long_press_is_momentary() {
        let mut h = Harness::new();
        h.modes.set_active_mode(Some(ModeId::new(MUTE)));
        let mut solo = ModeButtonCommand::new(ModeId::new(SOLO), "Solo");
        solo.execute(ButtonEvent::Down, &mut h.ctx());
        solo.execute(ButtonEvent::Long, &mut h.ctx());
        assert_eq!(h.modes.active_mode_id(), Some(ModeId::new(SOLO)));
        solo.execute(ButtonEvent::Up, &mut h.ctx());
        assert_eq!(h.modes.active_mode_id(), Some(ModeId::new(MUTE)));
    }

    #[test]
    fn switching_between_modes() {
        let mut h = Harness::new();
        let mut solo = ModeButtonCommand::new(ModeId::new(SOLO), "Solo");
        let mut mute = ModeButtonCommand::new(ModeId::new(MUTE), "Mute");
        press(&mut solo, &mut h, false);
        press(&mut mute, &mut h, false);
        assert_eq!(h.modes.active_mode_id(), Some(ModeId::new(MUTE)));
        assert_eq!(h.notifications.len(), 2);
    }
}
