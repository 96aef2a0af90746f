//! Commands bound to surface controls.
//!
//! Each control maps to one [`Command`]. The surface classifies the raw
//! signal and calls [`Command::execute`] with a [`CommandContext`] giving
//! access to the model, the view and mode managers and the scheduler for the
//! duration of the call.

mod cursor;
mod mode_button;
mod navigator;
mod view_select;

pub use cursor::CursorCommand;
pub use mode_button::ModeButtonCommand;
pub use navigator::{
    scroll_scenes_down, scroll_scenes_up, scroll_tracks_left, scroll_tracks_right, Navigator,
    ParameterPageNavigator, TrackNavigator,
};
pub use view_select::{next_view, ViewMultiSelectCommand};

use gridlink_types::ButtonEvent;

use crate::config::Timing;
use crate::mode::ModeManager;
use crate::model::Model;
use crate::schedule::{ScheduledTask, Scheduler};
use crate::view::ViewManager;

/// A unit of behavior bound to one control.
pub trait Command {
    /// React to a classified event. Most commands only act on `Down`.
    fn execute(&mut self, event: ButtonEvent, ctx: &mut CommandContext<'_>);

    /// Refresh hardware feedback owned by this command.
    fn update_feedback(&mut self, _ctx: &mut CommandContext<'_>) {}
}

/// What a command may touch while it runs.
pub struct CommandContext<'a> {
    pub model: &'a mut dyn Model,
    pub views: &'a mut ViewManager,
    pub modes: &'a mut ModeManager,
    scheduler: &'a mut Scheduler,
    notifications: &'a mut Vec<String>,
    shift_pressed: bool,
    timing: Timing,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        model: &'a mut dyn Model,
        views: &'a mut ViewManager,
        modes: &'a mut ModeManager,
        scheduler: &'a mut Scheduler,
        notifications: &'a mut Vec<String>,
        shift_pressed: bool,
        timing: Timing,
    ) -> Self {
        Self {
            model,
            views,
            modes,
            scheduler,
            notifications,
            shift_pressed,
            timing,
        }
    }

    pub fn is_shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Post follow-up work; it runs on a later tick, never during this call.
    pub fn schedule(&mut self, task: ScheduledTask, delay_ms: u64) {
        self.scheduler.schedule(task, delay_ms);
    }

    /// Queue a message for the surface display.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message.into());
    }
}
