use gridlink_core::midi::{MidiInputManager, MidiOutputManager};

/// Connect to input `port`, or the first available input.
pub(super) fn open_input(port: Option<usize>) -> Result<MidiInputManager, String> {
    let mut input = MidiInputManager::new();
    input.refresh_ports()?;
    if input.ports().is_empty() {
        return Err("no MIDI input ports available".to_string());
    }
    let index = port.unwrap_or(0);
    input.connect(index)?;
    Ok(input)
}

/// Connect to the output port with the same name as the input, falling back
/// to an unconnected output.
pub(super) fn open_matching_output(input_name: Option<&str>) -> MidiOutputManager {
    let mut output = MidiOutputManager::new();
    let Some(input_name) = input_name else {
        return output;
    };
    let matching = MidiOutputManager::list_ports()
        .into_iter()
        .find(|p| p.name == input_name);
    match matching {
        Some(port) => {
            if let Err(e) = output.connect(port.index) {
                log::warn!(target: "midi", "could not open output {}: {}", port.name, e);
            }
        }
        None => log::debug!(target: "midi", "no output port named {}", input_name),
    }
    output
}
