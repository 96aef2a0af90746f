//! Append-only JSONL log of surface interaction, for debugging and replay.
//!
//! Lives at `<data dir>/gridlink/surface.jsonl` and is tailable with
//! `tail -f`. Every dispatched button event is written with the view and mode
//! active at that moment; view and mode changes get their own entries.
//! `t_ms` is the surface's logical clock, so a replay can reproduce the
//! timing of delayed work.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gridlink_types::{ButtonEvent, ButtonId, ModeId, ViewId};

/// Log directory: `<data dir>/gridlink/`
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gridlink")
}

/// Append-only JSONL writer.
pub struct InteractionLog {
    writer: BufWriter<File>,
}

#[derive(Serialize)]
struct SessionHeader {
    event: &'static str,
    epoch_ms: u128,
    pid: u32,
}

#[derive(Serialize)]
struct ButtonLogEntry {
    t_ms: u64,
    button: ButtonId,
    action: ButtonEvent,
    view: Option<ViewId>,
    mode: Option<ModeId>,
}

#[derive(Serialize)]
struct ChangeLogEntry<'a> {
    t_ms: u64,
    event: &'static str,
    id: Option<u32>,
    name: &'a str,
}

/// Deserialized button entry for replay.
#[derive(Deserialize)]
struct ReplayEntry {
    #[serde(default)]
    t_ms: u64,
    button: Option<ButtonId>,
    action: Option<ButtonEvent>,
}

/// A button event read back from the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedButton {
    /// Surface clock when the event was dispatched.
    pub t_ms: u64,
    pub button: ButtonId,
    pub event: ButtonEvent,
}

impl InteractionLog {
    /// Open (or create) the log at `path`, writing a session header.
    pub fn open_at(path: &Path) -> Option<Self> {
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return None;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()?;
        let mut log = Self {
            writer: BufWriter::new(file),
        };

        let header = SessionHeader {
            event: "session_start",
            epoch_ms: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            pid: std::process::id(),
        };
        log.write(&header);
        Some(log)
    }

    /// Open the default surface log (`<data dir>/gridlink/surface.jsonl`).
    pub fn surface() -> Option<Self> {
        Self::open_at(&log_dir().join("surface.jsonl"))
    }

    fn write<T: Serialize>(&mut self, entry: &T) {
        if let Ok(json) = serde_json::to_string(entry) {
            let _ = writeln!(self.writer, "{}", json);
            let _ = self.writer.flush();
        }
    }

    /// Log a dispatched button event.
    pub fn log_button(
        &mut self,
        t_ms: u64,
        button: ButtonId,
        event: ButtonEvent,
        view: Option<ViewId>,
        mode: Option<ModeId>,
    ) {
        let entry = ButtonLogEntry {
            t_ms,
            button,
            action: event,
            view,
            mode,
        };
        self.write(&entry);
    }

    pub fn log_view_change(&mut self, t_ms: u64, view: Option<ViewId>, name: &str) {
        let entry = ChangeLogEntry {
            t_ms,
            event: "view",
            id: view.map(ViewId::get),
            name,
        };
        self.write(&entry);
    }

    pub fn log_mode_change(&mut self, t_ms: u64, mode: Option<ModeId>) {
        let entry = ChangeLogEntry {
            t_ms,
            event: "mode",
            id: mode.map(ModeId::get),
            name: "",
        };
        self.write(&entry);
    }
}

/// Error type for log replay.
#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Read the button events of a surface log, in order.
///
/// Session headers, change entries and unparseable lines are skipped.
pub fn read_button_events(path: &Path) -> Result<Vec<LoggedButton>, ReplayError> {
    let file = File::open(path)?;
    let mut events = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: ReplayEntry = match serde_json::from_str(&line) {
            Ok(e) => e,
            Err(_) => continue,
        };
        if let (Some(button), Some(event)) = (entry.button, entry.action) {
            events.push(LoggedButton {
                t_ms: entry.t_ms,
                button,
                event,
            });
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        File::create(&path).unwrap();
        assert!(read_button_events(&path).unwrap().is_empty());
    }

    #[test]
    fn written_buttons_read_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("surface.jsonl");
        {
            let mut log = InteractionLog::open_at(&path).unwrap();
            log.log_button(5, ButtonId::new(104), ButtonEvent::Down, Some(ViewId::new(0)), None);
            log.log_view_change(5, Some(ViewId::new(1)), "Play");
            log.log_mode_change(5, Some(ModeId::new(1)));
            log.log_button(40, ButtonId::new(104), ButtonEvent::Up, Some(ViewId::new(1)), None);
        }
        let events = read_button_events(&path).unwrap();
        assert_eq!(
            events,
            vec![
                LoggedButton {
                    t_ms: 5,
                    button: ButtonId::new(104),
                    event: ButtonEvent::Down,
                },
                LoggedButton {
                    t_ms: 40,
                    button: ButtonId::new(104),
                    event: ButtonEvent::Up,
                },
            ]
        );
    }

    #[test]
    fn entries_without_time_read_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.jsonl");
        std::fs::write(&path, "{\"button\":105,\"action\":\"Long\"}\n").unwrap();
        let events = read_button_events(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].t_ms, 0);
        assert_eq!(events[0].event, ButtonEvent::Long);
    }

    #[test]
    fn missing_log_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_button_events(&dir.path().join("absent.jsonl"));
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }
}
