use super::{Observable, ObservedValue};

/// Normalized RGB color of a clip slot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

/// A clip launcher slot, with the properties a grid surface observes.
#[derive(Debug, Clone)]
pub struct SlotState {
    index: usize,
    exists: ObservedValue<bool>,
    name: ObservedValue<String>,
    has_content: ObservedValue<bool>,
    color: ObservedValue<Rgb>,
    is_playing: ObservedValue<bool>,
    is_playback_queued: ObservedValue<bool>,
    is_recording: ObservedValue<bool>,
    is_recording_queued: ObservedValue<bool>,
    is_selected: ObservedValue<bool>,
    is_stop_queued: ObservedValue<bool>,
}

impl SlotState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            exists: ObservedValue::interested(false),
            name: ObservedValue::interested(String::new()),
            has_content: ObservedValue::interested(false),
            color: ObservedValue::interested(Rgb::default()),
            is_playing: ObservedValue::interested(false),
            is_playback_queued: ObservedValue::interested(false),
            is_recording: ObservedValue::interested(false),
            is_recording_queued: ObservedValue::interested(false),
            is_selected: ObservedValue::interested(false),
            is_stop_queued: ObservedValue::interested(false),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn does_exist(&self) -> bool {
        self.exists.get()
    }

    pub fn name(&self) -> String {
        self.name.get()
    }

    /// Name cut to at most `limit` characters.
    pub fn name_limited(&self, limit: usize) -> String {
        self.name.get().chars().take(limit).collect()
    }

    pub fn has_content(&self) -> bool {
        self.has_content.get()
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected.get()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing.get()
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording.get()
    }

    /// Playback is queued, either to play or to record.
    pub fn is_playing_queued(&self) -> bool {
        self.is_playback_queued.get() || self.is_recording_queued.get()
    }

    pub fn is_recording_queued(&self) -> bool {
        self.is_recording_queued.get()
    }

    pub fn is_stop_queued(&self) -> bool {
        self.is_stop_queued.get()
    }

    pub fn color(&self) -> Rgb {
        self.color.get()
    }

    /// Writing a slot color is not supported by the host API.
    pub fn set_color(&mut self, _color: Rgb) -> Result<(), String> {
        Err(format!("slot {}: setting the color is not supported by the host", self.index))
    }

    /// Host-side update of the clip held by this slot.
    pub fn update_clip(&mut self, name: &str, color: Rgb) {
        self.exists.set(true);
        self.has_content.set(true);
        self.name.set(name.to_string());
        self.color.set(color);
    }

    /// Host-side update of the transport flags.
    pub fn update_playback(&mut self, playing: bool, recording: bool) {
        self.is_playing.set(playing);
        self.is_recording.set(recording);
    }

    /// Host-side update of the queued flags.
    pub fn update_queued(&mut self, playback: bool, recording: bool, stop: bool) {
        self.is_playback_queued.set(playback);
        self.is_recording_queued.set(recording);
        self.is_stop_queued.set(stop);
    }

    pub fn update_selected(&mut self, selected: bool) {
        self.is_selected.set(selected);
    }
}

impl Observable for SlotState {
    fn enable_observers(&mut self, enable: bool) {
        self.exists.set_subscribed(enable);
        self.name.set_subscribed(enable);
        self.has_content.set_subscribed(enable);
        self.color.set_subscribed(enable);
        self.is_playing.set_subscribed(enable);
        self.is_playback_queued.set_subscribed(enable);
        self.is_recording.set_subscribed(enable);
        self.is_recording_queued.set_subscribed(enable);
        self.is_selected.set_subscribed(enable);
        self.is_stop_queued.set_subscribed(enable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_color_is_unsupported_and_keeps_color() {
        let mut slot = SlotState::new(2);
        let red = Rgb { red: 1.0, green: 0.0, blue: 0.0 };
        slot.update_clip("Loop", red);
        assert!(slot.set_color(Rgb { red: 0.0, green: 1.0, blue: 0.0 }).is_err());
        assert_eq!(slot.color(), red);
    }

    #[test]
    fn queued_covers_recording_queue() {
        let mut slot = SlotState::new(0);
        slot.update_queued(false, true, false);
        assert!(slot.is_playing_queued());
        assert!(slot.is_recording_queued());
    }

    #[test]
    fn disabled_observers_freeze_state() {
        let mut slot = SlotState::new(0);
        slot.enable_observers(false);
        slot.update_clip("Intro", Rgb::default());
        assert!(!slot.has_content());
        slot.enable_observers(true);
        slot.update_clip("Intro", Rgb::default());
        assert_eq!(slot.name_limited(3), "Int");
    }
}
