use serde::{Deserialize, Serialize};

use crate::Direction;

/// Snapshot of which arrow directions can currently navigate further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub can_scroll_up: bool,
    pub can_scroll_down: bool,
}

impl ScrollState {
    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
            Direction::Up => self.can_scroll_up,
            Direction::Down => self.can_scroll_down,
        }
    }
}

/// Semantic button states resolved to hardware colors by the color manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorState {
    ButtonOn,
    ButtonOff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_blocks_every_direction() {
        let state = ScrollState::default();
        assert!(Direction::ALL.iter().all(|d| !state.can_scroll(*d)));
    }

    #[test]
    fn can_scroll_reads_matching_flag() {
        let state = ScrollState {
            can_scroll_left: false,
            can_scroll_right: true,
            can_scroll_up: false,
            can_scroll_down: true,
        };
        assert!(!state.can_scroll(Direction::Left));
        assert!(state.can_scroll(Direction::Right));
        assert!(!state.can_scroll(Direction::Up));
        assert!(state.can_scroll(Direction::Down));
    }
}
