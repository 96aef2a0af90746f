use std::path::Path;

use gridlink_core::config::Config;
use gridlink_core::interaction_log::{read_button_events, ReplayError};
use gridlink_core::midi::MidiOutputManager;
use gridlink_core::model::Model;

use super::build_surface;

/// Re-dispatch every button event of a recorded log against a fresh
/// in-memory session, at the logged surface times, and print where it ends
/// up once the delayed work has run.
pub fn replay(config: &Config, path: &Path) -> Result<(), ReplayError> {
    let events = read_button_events(path)?;
    let mut control = build_surface(config, MidiOutputManager::new());
    control.replay(&events);

    let view = control
        .views()
        .active_view_id()
        .and_then(|id| control.views().view_name(id))
        .unwrap_or("-");
    let mode = control
        .modes()
        .active_mode_id()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "-".to_string());
    let selected = control
        .model()
        .track_bank
        .selected_absolute()
        .and_then(|t| control.model().track_bank.track_name(t))
        .unwrap_or("-");

    println!("events:  {}", events.len());
    println!("view:    {}", view);
    println!("mode:    {}", mode);
    println!("track:   {}", selected);
    println!(
        "offsets: track {}, scene {}",
        control.model().track_bank.track_offset(),
        control.model().track_bank.scene_offset()
    );
    log::debug!(
        target: "surface",
        "replayed {} events, selected {:?}",
        events.len(),
        control.model().selected_track()
    );
    Ok(())
}
