use midir::{MidiOutput, MidiOutputConnection};

use super::MidiPortInfo;

/// MIDI output to the surface, used for button feedback.
pub struct MidiOutputManager {
    connection: Option<MidiOutputConnection>,
    connected_port_name: Option<String>,
}

impl MidiOutputManager {
    pub fn new() -> Self {
        Self {
            connection: None,
            connected_port_name: None,
        }
    }

    pub fn list_ports() -> Vec<MidiPortInfo> {
        let Ok(midi_out) = MidiOutput::new("gridlink") else {
            return Vec::new();
        };
        midi_out
            .ports()
            .iter()
            .enumerate()
            .filter_map(|(index, port)| {
                midi_out
                    .port_name(port)
                    .ok()
                    .map(|name| MidiPortInfo { index, name })
            })
            .collect()
    }

    pub fn connect(&mut self, port_index: usize) -> Result<(), String> {
        self.disconnect();

        let midi_out = MidiOutput::new("gridlink").map_err(|e| e.to_string())?;
        let ports = midi_out.ports();
        let port = ports
            .get(port_index)
            .ok_or_else(|| format!("Invalid port index: {}", port_index))?;
        let port_name = midi_out
            .port_name(port)
            .unwrap_or_else(|_| "Unknown".to_string());

        let connection = midi_out
            .connect(port, "gridlink-output")
            .map_err(|e| e.to_string())?;
        log::info!(target: "midi", "output connected: {}", port_name);
        self.connection = Some(connection);
        self.connected_port_name = Some(port_name);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.close();
        }
        self.connected_port_name = None;
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn connected_port_name(&self) -> Option<&str> {
        self.connected_port_name.as_deref()
    }

    pub fn send_control_change(
        &mut self,
        channel: u8,
        controller: u8,
        value: u8,
    ) -> Result<(), String> {
        let Some(conn) = self.connection.as_mut() else {
            return Err("MIDI output not connected".to_string());
        };
        let message = [0xB0 | (channel & 0x0F), controller & 0x7F, value & 0x7F];
        conn.send(&message).map_err(|e| e.to_string())
    }
}

impl Drop for MidiOutputManager {
    fn drop(&mut self) {
        self.disconnect();
    }
}
