/// Panel names registered by default.
pub const VIEW_DASHBOARD: &str = "dashboard";
pub const VIEW_COLLECTION: &str = "collection";
pub const VIEW_LOGS: &str = "logs";

/// Tracks which top-level panel is visible.
///
/// Pure UI state, independent of polling: exactly one registered panel is
/// active at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSwitcher {
    panels: Vec<String>,
    active: usize,
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self::new([VIEW_DASHBOARD, VIEW_COLLECTION, VIEW_LOGS])
    }
}

impl ViewSwitcher {
    /// Registers the given panels; the first one starts active.
    /// `panels` must be non-empty.
    pub fn new<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let panels: Vec<String> = panels.into_iter().map(Into::into).collect();
        debug_assert!(!panels.is_empty(), "at least one panel must be registered");
        Self { panels, active: 0 }
    }

    /// Marks `name` as the only active panel, deactivating all others.
    /// Unknown names leave the selection untouched; returns whether the
    /// switch happened.
    pub fn show(&mut self, name: &str) -> bool {
        match self.panels.iter().position(|panel| panel == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &str {
        &self.panels[self.active]
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == name
    }

    pub fn panels(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(String::as_str)
    }
}
