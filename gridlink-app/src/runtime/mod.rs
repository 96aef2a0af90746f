//! App runtime: owns the MIDI ports and the control surface and drives the
//! surface clock.
//!
//! - `input`: MIDI port selection and polling
//! - `replay`: re-running a recorded interaction log offline

mod input;
mod replay;

pub use replay::replay;

use std::time::{Duration, Instant};

use gridlink_core::config::Config;
use gridlink_core::interaction_log::InteractionLog;
use gridlink_core::midi::{MidiInputManager, MidiOutputManager};
use gridlink_core::model::SessionModel;
use gridlink_core::surface::ControlSurface;

use crate::midi_surface::MidiSurface;

pub type AppSurface = ControlSurface<MidiSurface, SessionModel>;

/// Build the control surface for `config` over an in-memory session.
pub fn build_surface(config: &Config, output: MidiOutputManager) -> AppSurface {
    let (tracks, scenes) = config.session_size();
    let model = SessionModel::new(tracks, scenes, config.bank_width());
    let surface = MidiSurface::new(output, config.channel(), config.buttons());
    ControlSurface::from_config(config, surface, model)
}

/// Top-level runtime that owns the surface and drives the event loop.
pub struct AppRuntime {
    control: AppSurface,
    midi_input: MidiInputManager,
    started: Instant,
    last_flush_ms: u64,
    flush_interval_ms: u64,
}

impl AppRuntime {
    pub fn new(config: &Config, port: Option<usize>) -> Result<Self, String> {
        let midi_input = input::open_input(port)?;
        let output = input::open_matching_output(midi_input.connected_port_name());

        let mut control = build_surface(config, output);
        control.set_interaction_log(InteractionLog::surface());
        control.enable_observers(true);
        if !control.surface().is_connected() {
            log::warn!(target: "midi", "no MIDI output for surface feedback");
        }

        Ok(Self {
            control,
            midi_input,
            started: Instant::now(),
            last_flush_ms: 0,
            flush_interval_ms: config.timing().flush_interval_ms,
        })
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run one iteration: dispatch pending MIDI, run due work, then on the
    /// flush interval flush feedback and drop the input if its port is gone.
    pub fn step(&mut self) {
        let now = self.now_ms();
        for event in self.midi_input.poll_events() {
            self.control.handle_midi(&event, now);
        }
        self.control.tick(now);
        if now.saturating_sub(self.last_flush_ms) >= self.flush_interval_ms {
            self.control.flush();
            self.last_flush_ms = now;
            self.midi_input.check_connection();
        }
    }

    /// Run until the input port disappears.
    pub fn run(&mut self) {
        log::info!(
            target: "surface",
            "running on {}",
            self.midi_input.connected_port_name().unwrap_or("?")
        );
        self.control.flush();
        while self.midi_input.is_connected() {
            self.step();
            std::thread::sleep(Duration::from_millis(1));
        }
        self.control.enable_observers(false);
        log::info!(target: "surface", "input closed, stopping");
    }
}
