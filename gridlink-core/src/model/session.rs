use super::{
    ChannelBank, Model, Observable, ParameterBank, ParameterPages, SlotState, TrackBankState,
};

/// In-memory project: one track bank, the cursor device's parameter pages and
/// the clip slots of the selected track.
pub struct SessionModel {
    pub track_bank: TrackBankState,
    pub parameter_pages: ParameterPages,
    pub slots: Vec<SlotState>,
}

impl SessionModel {
    pub fn new(track_count: usize, scene_count: usize, bank_width: usize) -> Self {
        Self {
            track_bank: TrackBankState::new(track_count, scene_count, bank_width),
            parameter_pages: ParameterPages::new(
                ["Main", "Envelope", "Filter", "Modulation"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            slots: (0..bank_width).map(SlotState::new).collect(),
        }
    }
}

impl Model for SessionModel {
    fn current_track_bank(&self) -> &dyn ChannelBank {
        &self.track_bank
    }

    fn current_track_bank_mut(&mut self) -> &mut dyn ChannelBank {
        &mut self.track_bank
    }

    fn parameter_bank(&self) -> Option<&dyn ParameterBank> {
        Some(&self.parameter_pages)
    }

    fn parameter_bank_mut(&mut self) -> Option<&mut dyn ParameterBank> {
        Some(&mut self.parameter_pages)
    }

    fn enable_observers(&mut self, enable: bool) {
        log::debug!(target: "model", "observers {}", if enable { "enabled" } else { "disabled" });
        self.track_bank.enable_observers(enable);
        for slot in &mut self.slots {
            slot.enable_observers(enable);
        }
    }
}
