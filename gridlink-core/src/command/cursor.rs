use gridlink_types::{ButtonEvent, Direction, ScrollState};

use super::{Command, CommandContext, Navigator};
use crate::schedule::ScheduledTask;

/// One cursor arrow. Dispatches to the navigator on press and owns the
/// cached arrow scroll state.
pub struct CursorCommand<N: Navigator> {
    direction: Direction,
    navigator: N,
    scroll_state: ScrollState,
}

impl<N: Navigator> CursorCommand<N> {
    pub fn new(direction: Direction, navigator: N) -> Self {
        Self {
            direction,
            navigator,
            scroll_state: ScrollState::default(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The scroll state computed by the last [`Self::update_arrows`].
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Recompute the arrow states now and repaint the arrows after the
    /// repaint delay, once the host has settled.
    pub fn update_arrows(&mut self, ctx: &mut CommandContext<'_>) {
        self.scroll_state = self.navigator.update_arrow_states(&*ctx.model);
        let delay = ctx.timing().arrow_repaint_delay_ms;
        ctx.schedule(ScheduledTask::RepaintArrows(self.scroll_state), delay);
    }
}

impl<N: Navigator> Command for CursorCommand<N> {
    fn execute(&mut self, event: ButtonEvent, ctx: &mut CommandContext<'_>) {
        if event != ButtonEvent::Down {
            return;
        }
        log::debug!(target: "surface", "cursor {}", self.direction.name());
        match self.direction {
            Direction::Left => self.navigator.scroll_left(ctx),
            Direction::Right => self.navigator.scroll_right(ctx),
            Direction::Up => self.navigator.scroll_up(ctx),
            Direction::Down => self.navigator.scroll_down(ctx),
        }
    }

    fn update_feedback(&mut self, ctx: &mut CommandContext<'_>) {
        self.update_arrows(ctx);
    }
}
