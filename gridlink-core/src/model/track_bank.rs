use super::{ChannelBank, Observable, SelectedTrack};

/// In-memory track bank: a page of `page_size` tracks and scenes over the
/// whole project.
#[derive(Debug, Clone)]
pub struct TrackBankState {
    track_names: Vec<String>,
    scene_count: usize,
    page_size: usize,
    track_offset: usize,
    scene_offset: usize,
    /// Absolute index of the selected track.
    selected: Option<usize>,
    subscribed: bool,
}

impl TrackBankState {
    pub fn new(track_count: usize, scene_count: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            track_names: (1..=track_count).map(|n| format!("Track {}", n)).collect(),
            scene_count,
            page_size,
            track_offset: 0,
            scene_offset: 0,
            selected: None,
            subscribed: true,
        }
    }

    pub fn track_count(&self) -> usize {
        self.track_names.len()
    }

    pub fn track_name(&self, absolute: usize) -> Option<&str> {
        self.track_names.get(absolute).map(String::as_str)
    }

    pub fn track_offset(&self) -> usize {
        self.track_offset
    }

    pub fn scene_offset(&self) -> usize {
        self.scene_offset
    }

    /// Absolute index of the selected track, regardless of the visible page.
    pub fn selected_absolute(&self) -> Option<usize> {
        self.selected
    }

    /// Host-side selection change by absolute index. Dropped while
    /// unsubscribed; returns whether the selection was applied.
    pub fn select_absolute(&mut self, absolute: usize) -> bool {
        if !self.subscribed || absolute >= self.track_names.len() {
            return false;
        }
        self.selected = Some(absolute);
        true
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    fn max_scene_offset(&self) -> usize {
        self.scene_count.saturating_sub(self.page_size)
    }
}

impl ChannelBank for TrackBankState {
    fn page_size(&self) -> usize {
        self.page_size
    }

    fn selected_track(&self) -> Option<SelectedTrack> {
        let selected = self.selected?;
        if selected >= self.track_offset && selected < self.track_offset + self.page_size {
            Some(SelectedTrack {
                index: selected - self.track_offset,
            })
        } else {
            None
        }
    }

    fn select_track(&mut self, index: usize) {
        if !self.track_exists(index) {
            log::debug!(target: "model", "no track at bank index {}", index);
            return;
        }
        self.selected = Some(self.track_offset + index);
    }

    fn track_exists(&self, index: usize) -> bool {
        index < self.page_size && self.track_offset + index < self.track_names.len()
    }

    fn scroll_tracks_page_up(&mut self) {
        self.track_offset = self.track_offset.saturating_sub(self.page_size);
    }

    fn scroll_tracks_page_down(&mut self) {
        if self.can_scroll_tracks_down() {
            self.track_offset += self.page_size;
        }
    }

    fn can_scroll_tracks_up(&self) -> bool {
        self.track_offset > 0
    }

    fn can_scroll_tracks_down(&self) -> bool {
        self.track_offset + self.page_size < self.track_names.len()
    }

    fn scroll_scenes_up(&mut self) {
        self.scene_offset = self.scene_offset.saturating_sub(1);
    }

    fn scroll_scenes_down(&mut self) {
        if self.can_scroll_scenes_down() {
            self.scene_offset += 1;
        }
    }

    fn scroll_scenes_page_up(&mut self) {
        self.scene_offset = self.scene_offset.saturating_sub(self.page_size);
    }

    fn scroll_scenes_page_down(&mut self) {
        self.scene_offset = (self.scene_offset + self.page_size).min(self.max_scene_offset());
    }

    fn can_scroll_scenes_up(&self) -> bool {
        self.scene_offset > 0
    }

    fn can_scroll_scenes_down(&self) -> bool {
        self.scene_offset < self.max_scene_offset()
    }
}

impl Observable for TrackBankState {
    fn enable_observers(&mut self, enable: bool) {
        self.subscribed = enable;
    }
}
