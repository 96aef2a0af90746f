use std::path::{Path, PathBuf};

use serde::Deserialize;

use gridlink_types::{ButtonId, ColorId, ModeId, ViewId};

use crate::view::ViewInfo;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Delay before selecting a track on a freshly paged bank.
pub const TRACK_SELECT_DELAY_MS: u64 = 75;
/// Delay between recomputing the arrow states and repainting the arrows.
pub const ARROW_REPAINT_DELAY_MS: u64 = 150;
pub const LONG_PRESS_MS: u64 = 400;
pub const FLUSH_INTERVAL_MS: u64 = 100;
pub const DEFAULT_BANK_WIDTH: usize = 8;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    timing: TimingConfig,
    #[serde(default)]
    surface: SurfaceConfig,
    #[serde(default)]
    session: SessionConfig,
    views: Option<Vec<ViewEntry>>,
    modes: Option<Vec<ModeEntry>>,
}

#[derive(Deserialize, Default)]
struct TimingConfig {
    track_select_delay_ms: Option<u64>,
    arrow_repaint_delay_ms: Option<u64>,
    long_press_ms: Option<u64>,
    flush_interval_ms: Option<u64>,
}

#[derive(Deserialize, Default)]
struct SurfaceConfig {
    channel: Option<u8>,
    bank_width: Option<usize>,
    color_on: Option<u8>,
    color_off: Option<u8>,
    cursor: Option<String>,
    left: Option<u8>,
    right: Option<u8>,
    up: Option<u8>,
    down: Option<u8>,
    shift: Option<u8>,
    view_select: Option<u8>,
    view_cycle: Option<Vec<u32>>,
    initial_view: Option<u32>,
}

#[derive(Deserialize, Default)]
struct SessionConfig {
    track_count: Option<usize>,
    scene_count: Option<usize>,
}

#[derive(Deserialize, Clone)]
struct ViewEntry {
    id: u32,
    name: String,
}

#[derive(Deserialize, Clone)]
struct ModeEntry {
    id: u32,
    name: String,
    button: u8,
}

/// Millisecond timings of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub track_select_delay_ms: u64,
    pub arrow_repaint_delay_ms: u64,
    pub long_press_ms: u64,
    pub flush_interval_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            track_select_delay_ms: TRACK_SELECT_DELAY_MS,
            arrow_repaint_delay_ms: ARROW_REPAINT_DELAY_MS,
            long_press_ms: LONG_PRESS_MS,
            flush_interval_ms: FLUSH_INTERVAL_MS,
        }
    }
}

/// What the cursor arrows navigate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorTarget {
    #[default]
    Tracks,
    Parameters,
}

/// Controller numbers of the fixed surface buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    pub left: ButtonId,
    pub right: ButtonId,
    pub up: ButtonId,
    pub down: ButtonId,
    pub shift: ButtonId,
    pub view_select: ButtonId,
}

/// A mode button from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeBinding {
    pub mode: ModeId,
    pub name: String,
    pub button: ButtonId,
}

pub struct Config {
    timing: TimingConfig,
    surface: SurfaceConfig,
    session: SessionConfig,
    views: Vec<ViewEntry>,
    modes: Vec<ModeEntry>,
}

impl Config {
    /// Embedded defaults merged with the user config, if there is one.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::defaults_only(),
        }
    }

    /// Embedded defaults merged with the config file at `path`.
    /// An unreadable or malformed file is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::defaults_only();
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => log::warn!(
                    target: "config",
                    "ignoring malformed config {}: {}",
                    path.display(),
                    e
                ),
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    /// The embedded defaults, ignoring any user file.
    pub fn defaults_only() -> Self {
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            timing: base.timing,
            surface: base.surface,
            session: base.session,
            views: base.views.unwrap_or_default(),
            modes: base.modes.unwrap_or_default(),
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        let user_cycle = user.surface.view_cycle.is_some();
        let user_initial = user.surface.initial_view.is_some();
        merge_timing(&mut self.timing, user.timing);
        merge_surface(&mut self.surface, user.surface);
        merge_session(&mut self.session, user.session);
        if let Some(views) = user.views {
            self.views = views;
            // Default cycle and initial view name the default views.
            if !user_cycle {
                self.surface.view_cycle = None;
            }
            if !user_initial {
                self.surface.initial_view = None;
            }
        }
        if let Some(modes) = user.modes {
            self.modes = modes;
        }
    }

    pub fn timing(&self) -> Timing {
        let fallback = Timing::default();
        Timing {
            track_select_delay_ms: self
                .timing
                .track_select_delay_ms
                .unwrap_or(fallback.track_select_delay_ms),
            arrow_repaint_delay_ms: self
                .timing
                .arrow_repaint_delay_ms
                .unwrap_or(fallback.arrow_repaint_delay_ms),
            long_press_ms: self.timing.long_press_ms.unwrap_or(fallback.long_press_ms),
            flush_interval_ms: self
                .timing
                .flush_interval_ms
                .unwrap_or(fallback.flush_interval_ms)
                .max(1),
        }
    }

    /// MIDI channel of the surface (0-15).
    pub fn channel(&self) -> u8 {
        self.surface.channel.unwrap_or(0).min(15)
    }

    /// Tracks per bank page (clamped to 1..=64).
    pub fn bank_width(&self) -> usize {
        self.surface
            .bank_width
            .unwrap_or(DEFAULT_BANK_WIDTH)
            .clamp(1, 64)
    }

    /// Hardware colors for (on, off) buttons.
    pub fn button_colors(&self) -> (ColorId, ColorId) {
        (
            ColorId::new(self.surface.color_on.unwrap_or(127)),
            ColorId::new(self.surface.color_off.unwrap_or(0)),
        )
    }

    pub fn cursor_target(&self) -> CursorTarget {
        self.surface
            .cursor
            .as_deref()
            .and_then(parse_cursor_target)
            .unwrap_or_default()
    }

    pub fn buttons(&self) -> ButtonMap {
        let s = &self.surface;
        ButtonMap {
            left: ButtonId::new(s.left.unwrap_or(106)),
            right: ButtonId::new(s.right.unwrap_or(107)),
            up: ButtonId::new(s.up.unwrap_or(104)),
            down: ButtonId::new(s.down.unwrap_or(105)),
            shift: ButtonId::new(s.shift.unwrap_or(111)),
            view_select: ButtonId::new(s.view_select.unwrap_or(108)),
        }
    }

    pub fn views(&self) -> Vec<ViewInfo> {
        self.views
            .iter()
            .map(|v| ViewInfo {
                id: ViewId::new(v.id),
                name: v.name.clone(),
            })
            .collect()
    }

    /// Cycle order of the view select button; defaults to every view in
    /// declaration order. Ids that name no registered view are dropped.
    pub fn view_cycle(&self) -> Vec<ViewId> {
        match &self.surface.view_cycle {
            Some(cycle) => cycle
                .iter()
                .filter(|id| {
                    let known = self.has_view(**id);
                    if !known {
                        log::warn!(target: "config", "view_cycle names unknown view {}", id);
                    }
                    known
                })
                .map(|id| ViewId::new(*id))
                .collect(),
            None => self.views.iter().map(|v| ViewId::new(v.id)).collect(),
        }
    }

    /// View active at startup; an unknown configured id falls back to the
    /// first view.
    pub fn initial_view(&self) -> Option<ViewId> {
        let first = self.views.first().map(|v| ViewId::new(v.id));
        match self.surface.initial_view {
            Some(id) if self.has_view(id) => Some(ViewId::new(id)),
            Some(id) => {
                log::warn!(target: "config", "initial_view names unknown view {}", id);
                first
            }
            None => first,
        }
    }

    fn has_view(&self, id: u32) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    pub fn modes(&self) -> Vec<ModeBinding> {
        self.modes
            .iter()
            .map(|m| ModeBinding {
                mode: ModeId::new(m.id),
                name: m.name.clone(),
                button: ButtonId::new(m.button),
            })
            .collect()
    }

    /// (track count, scene count) of the in-memory session.
    pub fn session_size(&self) -> (usize, usize) {
        (
            self.session.track_count.unwrap_or(32),
            self.session.scene_count.unwrap_or(16),
        )
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gridlink").join("config.toml"))
}

fn merge_timing(base: &mut TimingConfig, user: TimingConfig) {
    if user.track_select_delay_ms.is_some() {
        base.track_select_delay_ms = user.track_select_delay_ms;
    }
    if user.arrow_repaint_delay_ms.is_some() {
        base.arrow_repaint_delay_ms = user.arrow_repaint_delay_ms;
    }
    if user.long_press_ms.is_some() {
        base.long_press_ms = user.long_press_ms;
    }
    if user.flush_interval_ms.is_some() {
        base.flush_interval_ms = user.flush_interval_ms;
    }
}

fn merge_surface(base: &mut SurfaceConfig, user: SurfaceConfig) {
    if user.channel.is_some() {
        base.channel = user.channel;
    }
    if user.bank_width.is_some() {
        base.bank_width = user.bank_width;
    }
    if user.color_on.is_some() {
        base.color_on = user.color_on;
    }
    if user.color_off.is_some() {
        base.color_off = user.color_off;
    }
    if user.cursor.is_some() {
        base.cursor = user.cursor;
    }
    if user.left.is_some() {
        base.left = user.left;
    }
    if user.right.is_some() {
        base.right = user.right;
    }
    if user.up.is_some() {
        base.up = user.up;
    }
    if user.down.is_some() {
        base.down = user.down;
    }
    if user.shift.is_some() {
        base.shift = user.shift;
    }
    if user.view_select.is_some() {
        base.view_select = user.view_select;
    }
    if user.view_cycle.is_some() {
        base.view_cycle = user.view_cycle;
    }
    if user.initial_view.is_some() {
        base.initial_view = user.initial_view;
    }
}

fn merge_session(base: &mut SessionConfig, user: SessionConfig) {
    if user.track_count.is_some() {
        base.track_count = user.track_count;
    }
    if user.scene_count.is_some() {
        base.scene_count = user.scene_count;
    }
}

fn parse_cursor_target(s: &str) -> Option<CursorTarget> {
    match s.to_lowercase().as_str() {
        "tracks" | "track" => Some(CursorTarget::Tracks),
        "parameters" | "params" | "device" => Some(CursorTarget::Parameters),
        _ => None,
    }
}
