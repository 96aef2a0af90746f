//! # gridlink-types
//!
//! Shared type definitions for the gridlink controller framework.
//! This crate contains the small value types passed between the control
//! surface, its commands and the DAW-side collaborators.

mod event;
mod scroll;

pub use event::{ButtonEvent, Direction};
pub use scroll::{ColorState, ScrollState};

/// Identifier of a view (an input-mapping mode of the surface).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ViewId(u32);

impl ViewId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a track mode (solo, mute, volume, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ModeId(u32);

impl ModeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ModeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical control on the surface: its controller (or note) number on the
/// surface MIDI channel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ButtonId(u8);

impl ButtonId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hardware color value (the velocity/value byte a surface LED understands).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct ColorId(u8);

impl ColorId {
    pub fn new(id: u8) -> Self {
        Self(id)
    }
    pub fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
