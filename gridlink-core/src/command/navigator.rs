use gridlink_types::ScrollState;

use super::CommandContext;
use crate::model::{ChannelBank, Model, SelectedTrack};
use crate::schedule::ScheduledTask;

/// What a cursor arrow navigates: tracks, device parameter pages, ...
///
/// Left/right and the arrow states are specific to the navigated object;
/// up/down scroll scenes unless overridden.
pub trait Navigator {
    /// Compute which directions can currently navigate further.
    fn update_arrow_states(&self, model: &dyn Model) -> ScrollState;

    fn scroll_left(&mut self, ctx: &mut CommandContext<'_>);

    fn scroll_right(&mut self, ctx: &mut CommandContext<'_>);

    fn scroll_up(&mut self, ctx: &mut CommandContext<'_>) {
        scroll_scenes_up(ctx);
    }

    fn scroll_down(&mut self, ctx: &mut CommandContext<'_>) {
        scroll_scenes_down(ctx);
    }
}

/// Scroll scenes up by one, or by a page while shift is held.
pub fn scroll_scenes_up(ctx: &mut CommandContext<'_>) {
    let shift = ctx.is_shift_pressed();
    let bank = ctx.model.current_track_bank_mut();
    if shift {
        bank.scroll_scenes_page_up();
    } else {
        bank.scroll_scenes_up();
    }
}

/// Scroll scenes down by one, or by a page while shift is held.
pub fn scroll_scenes_down(ctx: &mut CommandContext<'_>) {
    let shift = ctx.is_shift_pressed();
    let bank = ctx.model.current_track_bank_mut();
    if shift {
        bank.scroll_scenes_page_down();
    } else {
        bank.scroll_scenes_down();
    }
}

/// Select the previous track, paging the bank backwards at the left edge or
/// while shift is held.
pub fn scroll_tracks_left(ctx: &mut CommandContext<'_>) {
    let selected = ctx.model.selected_track();
    let index = selected.map_or(0, |t| t.index as i64 - 1);
    if index == -1 || ctx.is_shift_pressed() {
        scroll_track_bank_left(ctx, selected, index);
        return;
    }
    ctx.model.current_track_bank_mut().select_track(index as usize);
}

fn scroll_track_bank_left(
    ctx: &mut CommandContext<'_>,
    selected: Option<SelectedTrack>,
    index: i64,
) {
    let bank = ctx.model.current_track_bank_mut();
    if !bank.can_scroll_tracks_up() {
        return;
    }
    bank.scroll_tracks_page_up();
    // The new page is not selectable until the host has moved the bank.
    let new_selection = match selected {
        Some(track) if index != -1 => track.index,
        _ => bank.page_size() - 1,
    };
    let delay = ctx.timing().track_select_delay_ms;
    ctx.schedule(ScheduledTask::SelectTrack(new_selection), delay);
}

/// Select the next track, paging the bank forwards at the right edge or
/// while shift is held.
pub fn scroll_tracks_right(ctx: &mut CommandContext<'_>) {
    let selected = ctx.model.selected_track();
    let index = selected.map_or(0, |t| t.index as i64 + 1);
    let width = ctx.model.current_track_bank().page_size() as i64;
    if index == width || ctx.is_shift_pressed() {
        scroll_track_bank_right(ctx, selected, index == width);
        return;
    }
    ctx.model.current_track_bank_mut().select_track(index as usize);
}

fn scroll_track_bank_right(
    ctx: &mut CommandContext<'_>,
    selected: Option<SelectedTrack>,
    at_edge: bool,
) {
    let bank = ctx.model.current_track_bank_mut();
    if !bank.can_scroll_tracks_down() {
        return;
    }
    bank.scroll_tracks_page_down();
    let new_selection = match selected {
        Some(track) if !at_edge => track.index,
        _ => 0,
    };
    let delay = ctx.timing().track_select_delay_ms;
    ctx.schedule(ScheduledTask::SelectTrack(new_selection), delay);
}

fn scene_states(bank: &dyn ChannelBank, state: &mut ScrollState) {
    state.can_scroll_up = bank.can_scroll_scenes_up();
    state.can_scroll_down = bank.can_scroll_scenes_down();
}

/// Arrows move the track selection and page the track bank.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackNavigator;

impl Navigator for TrackNavigator {
    fn update_arrow_states(&self, model: &dyn Model) -> ScrollState {
        let bank = model.current_track_bank();
        let selected = bank.selected_track();
        let mut state = ScrollState {
            can_scroll_left: selected.is_some_and(|t| t.index > 0) || bank.can_scroll_tracks_up(),
            can_scroll_right: selected.is_some_and(|t| {
                t.index + 1 < bank.page_size() && bank.track_exists(t.index + 1)
            }) || bank.can_scroll_tracks_down(),
            ..ScrollState::default()
        };
        scene_states(bank, &mut state);
        state
    }

    fn scroll_left(&mut self, ctx: &mut CommandContext<'_>) {
        scroll_tracks_left(ctx);
    }

    fn scroll_right(&mut self, ctx: &mut CommandContext<'_>) {
        scroll_tracks_right(ctx);
    }
}

/// Left/right step through the cursor device's parameter pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterPageNavigator;

impl Navigator for ParameterPageNavigator {
    fn update_arrow_states(&self, model: &dyn Model) -> ScrollState {
        let mut state = ScrollState::default();
        if let Some(pages) = model.parameter_bank() {
            state.can_scroll_left = pages.has_previous_page();
            state.can_scroll_right = pages.has_next_page();
        }
        scene_states(model.current_track_bank(), &mut state);
        state
    }

    fn scroll_left(&mut self, ctx: &mut CommandContext<'_>) {
        match ctx.model.parameter_bank_mut() {
            Some(pages) => pages.select_previous_page(),
            None => log::debug!(target: "surface", "no cursor device parameters"),
        }
    }

    fn scroll_right(&mut self, ctx: &mut CommandContext<'_>) {
        match ctx.model.parameter_bank_mut() {
            Some(pages) => pages.select_next_page(),
            None => log::debug!(target: "surface", "no cursor device parameters"),
        }
    }
}
