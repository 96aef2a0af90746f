use gridlink_core::config::ButtonMap;
use gridlink_core::midi::MidiOutputManager;
use gridlink_core::surface::Surface;
use gridlink_types::{ButtonId, ColorId, Direction};

/// Surface backed by a MIDI output port: LEDs are set with control changes
/// on the surface channel.
pub struct MidiSurface {
    output: MidiOutputManager,
    channel: u8,
    buttons: ButtonMap,
}

impl MidiSurface {
    pub fn new(output: MidiOutputManager, channel: u8, buttons: ButtonMap) -> Self {
        Self {
            output,
            channel,
            buttons,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.output.is_connected()
    }
}

impl Surface for MidiSurface {
    fn update_button(&mut self, button: ButtonId, color: ColorId) {
        if !self.output.is_connected() {
            return;
        }
        if let Err(e) = self
            .output
            .send_control_change(self.channel, button.get(), color.get())
        {
            log::warn!(target: "midi", "failed to light button {}: {}", button, e);
        }
    }

    fn arrow_button(&self, direction: Direction) -> ButtonId {
        match direction {
            Direction::Left => self.buttons.left,
            Direction::Right => self.buttons.right,
            Direction::Up => self.buttons.up,
            Direction::Down => self.buttons.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlink_core::config::Config;

    #[test]
    fn arrows_follow_button_map() {
        let config = Config::defaults_only();
        let surface = MidiSurface::new(MidiOutputManager::new(), 0, config.buttons());
        assert_eq!(surface.arrow_button(Direction::Left), ButtonId::new(106));
        assert_eq!(surface.arrow_button(Direction::Down), ButtonId::new(105));
    }

    #[test]
    fn unconnected_output_drops_led_updates() {
        let config = Config::defaults_only();
        let mut surface = MidiSurface::new(MidiOutputManager::new(), 0, config.buttons());
        assert!(!surface.is_connected());
        surface.update_button(ButtonId::new(106), ColorId::new(21));
    }
}
