use serde::{Deserialize, Serialize};

/// Classified transition of a physical control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonEvent {
    Down,
    Up,
    /// The control has been held past the long-press threshold.
    Long,
}

impl ButtonEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ButtonEvent::Down => "down",
            ButtonEvent::Up => "up",
            ButtonEvent::Long => "long",
        }
    }
}

/// Direction of a cursor arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}
