//! MIDI transport: port management and parsing of surface messages.
//!
//! Only the messages a button surface produces are parsed. Everything else
//! is dropped in the input callback.

mod output;

pub use output::MidiOutputManager;

use midir::{MidiInput, MidiInputConnection};
use std::sync::mpsc::{self, Receiver};

/// A parsed surface message with its driver timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiEvent {
    /// Event timestamp in microseconds (driver-specific epoch)
    pub timestamp_us: u64,
    pub kind: MidiEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEventKind {
    NoteOn {
        channel: u8,
        note: u8,
        velocity: u8,
    },
    NoteOff {
        channel: u8,
        note: u8,
    },
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
}

impl MidiEvent {
    pub fn new(timestamp_us: u64, kind: MidiEventKind) -> Self {
        Self { timestamp_us, kind }
    }

    /// Channel, control number and value of a button message.
    /// Note Off reports value 0.
    pub fn button_signal(&self) -> (u8, u8, u8) {
        match self.kind {
            MidiEventKind::NoteOn {
                channel,
                note,
                velocity,
            } => (channel, note, velocity),
            MidiEventKind::NoteOff { channel, note } => (channel, note, 0),
            MidiEventKind::ControlChange {
                channel,
                controller,
                value,
            } => (channel, controller, value),
        }
    }
}

/// Information about an available MIDI port
#[derive(Debug, Clone)]
pub struct MidiPortInfo {
    pub index: usize,
    pub name: String,
}

/// Surface input: one connected port whose parsed messages are queued by the
/// midir callback thread and drained by the event loop.
pub struct MidiInputManager {
    connection: Option<MidiInputConnection<()>>,
    events: Option<Receiver<MidiEvent>>,
    port_name: Option<String>,
    ports: Vec<MidiPortInfo>,
}

impl MidiInputManager {
    pub fn new() -> Self {
        Self {
            connection: None,
            events: None,
            port_name: None,
            ports: Vec::new(),
        }
    }

    /// Re-list the input ports.
    pub fn refresh_ports(&mut self) -> Result<(), String> {
        let midi_in = MidiInput::new("gridlink").map_err(|e| e.to_string())?;
        self.ports = midi_in
            .ports()
            .iter()
            .enumerate()
            .filter_map(|(index, port)| {
                midi_in
                    .port_name(port)
                    .ok()
                    .map(|name| MidiPortInfo { index, name })
            })
            .collect();
        Ok(())
    }

    /// Ports found by the last [`Self::refresh_ports`].
    pub fn ports(&self) -> &[MidiPortInfo] {
        &self.ports
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    pub fn connected_port_name(&self) -> Option<&str> {
        self.port_name.as_deref()
    }

    pub fn connect(&mut self, port_index: usize) -> Result<(), String> {
        self.disconnect();

        let midi_in = MidiInput::new("gridlink").map_err(|e| e.to_string())?;
        let ports = midi_in.ports();
        let port = ports
            .get(port_index)
            .ok_or_else(|| format!("Invalid port index: {}", port_index))?;
        let name = midi_in.port_name(port).map_err(|e| e.to_string())?;

        let (tx, rx) = mpsc::channel();
        let connection = midi_in
            .connect(
                port,
                "gridlink-input",
                move |timestamp, message, _| {
                    if let Some(kind) = parse_midi_message(message) {
                        let _ = tx.send(MidiEvent::new(timestamp, kind));
                    }
                },
                (),
            )
            .map_err(|e| e.to_string())?;

        log::info!(target: "midi", "input connected: {}", name);
        self.connection = Some(connection);
        self.events = Some(rx);
        self.port_name = Some(name);
        Ok(())
    }

    pub fn disconnect(&mut self) {
        if let Some(conn) = self.connection.take() {
            conn.close();
        }
        self.events = None;
        self.port_name = None;
    }

    /// Re-list the ports and disconnect if the connected one has gone away.
    /// Returns whether the input is still connected.
    pub fn check_connection(&mut self) -> bool {
        if self.connection.is_none() {
            return false;
        }
        if let Err(e) = self.refresh_ports() {
            log::warn!(target: "midi", "could not list input ports: {}", e);
            return true;
        }
        self.drop_if_port_missing()
    }

    fn drop_if_port_missing(&mut self) -> bool {
        let present = match &self.port_name {
            Some(name) => self.ports.iter().any(|p| p.name == *name),
            None => false,
        };
        if !present {
            log::warn!(
                target: "midi",
                "input port {} disappeared",
                self.port_name.as_deref().unwrap_or("?")
            );
            self.disconnect();
        }
        present
    }

    /// Drain pending events without blocking.
    pub fn poll_events(&self) -> Vec<MidiEvent> {
        match &self.events {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }
}

/// Parse a raw MIDI message into a button-relevant MidiEventKind
pub fn parse_midi_message(data: &[u8]) -> Option<MidiEventKind> {
    if data.len() < 3 {
        return None;
    }

    let status = data[0];
    let channel = status & 0x0F;

    match status & 0xF0 {
        0x80 => Some(MidiEventKind::NoteOff {
            channel,
            note: data[1],
        }),
        // Note On with velocity 0 is a Note Off
        0x90 if data[2] == 0 => Some(MidiEventKind::NoteOff {
            channel,
            note: data[1],
        }),
        0x90 => Some(MidiEventKind::NoteOn {
            channel,
            note: data[1],
            velocity: data[2],
        }),
        0xB0 => Some(MidiEventKind::ControlChange {
            channel,
            controller: data[1],
            value: data[2],
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(index: usize, name: &str) -> MidiPortInfo {
        MidiPortInfo {
            index,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_listed_port_keeps_connection() {
        let mut input = MidiInputManager::new();
        input.port_name = Some("Grid".to_string());
        input.ports = vec![port(0, "Keys"), port(1, "Grid")];
        assert!(input.drop_if_port_missing());
        assert_eq!(input.connected_port_name(), Some("Grid"));
    }

    #[test]
    fn test_vanished_port_disconnects() {
        let mut input = MidiInputManager::new();
        input.port_name = Some("Grid".to_string());
        input.ports = vec![port(0, "Keys")];
        assert!(!input.drop_if_port_missing());
        assert_eq!(input.connected_port_name(), None);
        assert!(!input.is_connected());
        assert!(input.poll_events().is_empty());
    }

    #[test]
    fn test_unconnected_input_reports_disconnected() {
        let mut input = MidiInputManager::new();
        assert!(!input.check_connection());
    }

    #[test]
    fn test_parse_note_on() {
        let event = parse_midi_message(&[0x91, 60, 100]).unwrap();
        assert_eq!(
            event,
            MidiEventKind::NoteOn {
                channel: 1,
                note: 60,
                velocity: 100
            }
        );
    }

    #[test]
    fn test_parse_note_on_velocity_zero() {
        let event = parse_midi_message(&[0x90, 60, 0]).unwrap();
        assert!(matches!(event, MidiEventKind::NoteOff { note: 60, .. }));
    }

    #[test]
    fn test_parse_control_change() {
        let event = parse_midi_message(&[0xB0, 104, 127]).unwrap();
        assert_eq!(
            event,
            MidiEventKind::ControlChange {
                channel: 0,
                controller: 104,
                value: 127
            }
        );
    }

    #[test]
    fn test_parse_ignores_other_messages() {
        assert!(parse_midi_message(&[0xE0, 0x00, 0x40]).is_none());
        assert!(parse_midi_message(&[0xC0, 5]).is_none());
        assert!(parse_midi_message(&[0xF0, 0x7E, 0x00, 0x06, 0x01, 0xF7]).is_none());
        assert!(parse_midi_message(&[]).is_none());
    }

    #[test]
    fn test_button_signal() {
        let off = MidiEvent::new(0, MidiEventKind::NoteOff { channel: 2, note: 9 });
        assert_eq!(off.button_signal(), (2, 9, 0));
    }
}
