use gridlink_types::{ButtonEvent, ViewId};

use super::{Command, CommandContext};

/// The view after `active` in `views`, wrapping to the first one. An active
/// view missing from the list also yields the first. `None` only for an
/// empty list.
pub fn next_view(active: Option<ViewId>, views: &[ViewId]) -> Option<ViewId> {
    let position = active.and_then(|id| views.iter().position(|v| *v == id));
    let next = match position {
        Some(p) if p + 1 < views.len() => p + 1,
        _ => 0,
    };
    views.get(next).copied()
}

/// Cycles the active view through a fixed list on each press.
pub struct ViewMultiSelectCommand {
    views: Vec<ViewId>,
}

impl ViewMultiSelectCommand {
    pub fn new(views: Vec<ViewId>) -> Self {
        Self { views }
    }

    pub fn views(&self) -> &[ViewId] {
        &self.views
    }
}

impl Command for ViewMultiSelectCommand {
    fn execute(&mut self, event: ButtonEvent, ctx: &mut CommandContext<'_>) {
        if event != ButtonEvent::Down {
            return;
        }
        match next_view(ctx.views.active_view_id(), &self.views) {
            Some(next) => {
                ctx.views.set_active_view(next);
            }
            None => log::warn!(target: "surface", "view select command has no views"),
        }
    }
}
