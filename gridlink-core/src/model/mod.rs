//! DAW-side collaborators reached by the surface commands.
//!
//! The traits here are the narrow capability sets the commands depend on.
//! The in-memory implementations stand in for a host binding: they answer
//! every getter synchronously and clamp their own scroll positions.

mod observe;
mod parameter_bank;
mod session;
mod slot;
mod track_bank;

pub use observe::{Observable, ObservedValue};
pub use parameter_bank::ParameterPages;
pub use session::SessionModel;
pub use slot::{Rgb, SlotState};
pub use track_bank::TrackBankState;

/// Handle on the selected track, as seen through the current bank page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedTrack {
    /// Position inside the bank page (0-based).
    pub index: usize,
}

/// A paged window over the tracks and scenes of the project.
pub trait ChannelBank {
    /// Number of tracks visible in one page.
    fn page_size(&self) -> usize;

    /// The selected track, if it lies inside the current page.
    fn selected_track(&self) -> Option<SelectedTrack>;

    /// Select the track at `index` inside the current page.
    fn select_track(&mut self, index: usize);

    /// Whether a track exists at `index` inside the current page.
    fn track_exists(&self, index: usize) -> bool;

    fn scroll_tracks_page_up(&mut self);
    fn scroll_tracks_page_down(&mut self);
    fn can_scroll_tracks_up(&self) -> bool;
    fn can_scroll_tracks_down(&self) -> bool;

    fn scroll_scenes_up(&mut self);
    fn scroll_scenes_down(&mut self);
    fn scroll_scenes_page_up(&mut self);
    fn scroll_scenes_page_down(&mut self);
    fn can_scroll_scenes_up(&self) -> bool;
    fn can_scroll_scenes_down(&self) -> bool;
}

/// Parameter pages of the cursor device.
pub trait ParameterBank {
    fn select_previous_page(&mut self);
    fn select_next_page(&mut self);
    fn has_previous_page(&self) -> bool;
    fn has_next_page(&self) -> bool;
}

/// Everything a command may read or change on the DAW side.
pub trait Model {
    fn current_track_bank(&self) -> &dyn ChannelBank;
    fn current_track_bank_mut(&mut self) -> &mut dyn ChannelBank;

    /// Convenience: the selected track of the current bank.
    fn selected_track(&self) -> Option<SelectedTrack> {
        self.current_track_bank().selected_track()
    }

    fn parameter_bank(&self) -> Option<&dyn ParameterBank> {
        None
    }

    fn parameter_bank_mut(&mut self) -> Option<&mut dyn ParameterBank> {
        None
    }

    /// Subscribe to (or unsubscribe from) every observed property.
    fn enable_observers(&mut self, _enable: bool) {}
}
