//! # gridlink-core
//!
//! Control-surface framework for grid controllers driving a DAW. Maps the
//! surface's buttons to commands, tracks views and modes, and navigates the
//! DAW's track bank and parameter pages, independent of any transport.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gridlink_core::config::Config;
//! use gridlink_core::model::SessionModel;
//! use gridlink_core::surface::ControlSurface;
//!
//! let config = Config::load();
//! let (tracks, scenes) = config.session_size();
//! let model = SessionModel::new(tracks, scenes, config.bank_width());
//! let mut control = ControlSurface::from_config(&config, my_surface, model);
//!
//! // Feed raw button values, then let time pass.
//! control.handle_button(button, 127, now_ms);
//! control.tick(now_ms);
//! control.flush();
//! ```
//!
//! ## Modules
//!
//! - [`surface`]: `ControlSurface`, the `Surface` trait, event classification
//! - [`command`]: `Command` trait, cursor navigation, view and mode buttons
//! - [`model`]: DAW-side collaborators (track bank, parameter pages, slots)
//! - [`view`] / [`mode`]: active view and track mode bookkeeping
//! - [`schedule`]: delayed follow-up tasks on a logical clock
//! - [`midi`]: MIDI input/output port management
//! - [`config`]: TOML configuration
//! - [`interaction_log`]: JSONL log of surface interaction

pub mod color;
pub mod command;
pub mod config;
pub mod interaction_log;
pub mod midi;
pub mod mode;
pub mod model;
pub mod schedule;
pub mod surface;
pub mod view;
