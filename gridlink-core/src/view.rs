use gridlink_types::ViewId;

/// A registered view: its id and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewInfo {
    pub id: ViewId,
    pub name: String,
}

/// Holds the fixed set of views and the single active one.
#[derive(Debug, Clone)]
pub struct ViewManager {
    views: Vec<ViewInfo>,
    active: Option<ViewId>,
    previous: Option<ViewId>,
}

impl ViewManager {
    /// Create a view manager over a fixed set of views. Nothing is active yet.
    pub fn new(views: Vec<ViewInfo>) -> Self {
        Self {
            views,
            active: None,
            previous: None,
        }
    }

    pub fn active_view_id(&self) -> Option<ViewId> {
        self.active
    }

    pub fn previous_view_id(&self) -> Option<ViewId> {
        self.previous
    }

    pub fn is_active(&self, id: ViewId) -> bool {
        self.active == Some(id)
    }

    pub fn has_view(&self, id: ViewId) -> bool {
        self.views.iter().any(|v| v.id == id)
    }

    pub fn view_name(&self, id: ViewId) -> Option<&str> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }

    /// Activate a registered view. Unknown ids leave the state untouched.
    pub fn set_active_view(&mut self, id: ViewId) -> bool {
        if !self.has_view(id) {
            log::warn!(target: "surface", "ignoring unknown view id {}", id);
            return false;
        }
        if self.active != Some(id) {
            self.previous = self.active;
            self.active = Some(id);
            log::debug!(
                target: "surface",
                "active view: {}",
                self.view_name(id).unwrap_or("?")
            );
        }
        true
    }

    /// Swap back to the previously active view.
    pub fn restore_previous_view(&mut self) -> bool {
        match self.previous {
            Some(previous) => self.set_active_view(previous),
            None => false,
        }
    }

    /// All registered view ids, in registration order.
    pub fn view_ids(&self) -> Vec<ViewId> {
        self.views.iter().map(|v| v.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ViewManager {
        ViewManager::new(vec![
            ViewInfo { id: ViewId::new(10), name: "session".into() },
            ViewInfo { id: ViewId::new(20), name: "play".into() },
            ViewInfo { id: ViewId::new(30), name: "drum".into() },
        ])
    }

    #[test]
    fn starts_without_active_view() {
        let views = manager();
        assert_eq!(views.active_view_id(), None);
        assert_eq!(views.view_ids().len(), 3);
    }

    #[test]
    fn set_active_tracks_previous() {
        let mut views = manager();
        assert!(views.set_active_view(ViewId::new(10)));
        assert!(views.set_active_view(ViewId::new(20)));
        assert_eq!(views.previous_view_id(), Some(ViewId::new(10)));
        assert!(views.restore_previous_view());
        assert_eq!(views.active_view_id(), Some(ViewId::new(10)));
        assert_eq!(views.previous_view_id(), Some(ViewId::new(20)));
    }

    #[test]
    fn reactivating_keeps_previous() {
        let mut views = manager();
        views.set_active_view(ViewId::new(10));
        views.set_active_view(ViewId::new(20));
        views.set_active_view(ViewId::new(20));
        assert_eq!(views.previous_view_id(), Some(ViewId::new(10)));
    }

    #[test]
    fn unknown_view_is_rejected() {
        let mut views = manager();
        views.set_active_view(ViewId::new(30));
        assert!(!views.set_active_view(ViewId::new(99)));
        assert_eq!(views.active_view_id(), Some(ViewId::new(30)));
        assert_eq!(views.view_name(ViewId::new(30)), Some("drum"));
    }
}
