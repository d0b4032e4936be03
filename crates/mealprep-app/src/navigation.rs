//! Sidebar navigation model
//!
//! Renders the page registry into a list of links, marks the current page,
//! and holds the disclosure state used by the collapsible mobile panel and
//! the user menu.

use serde::Serialize;

use mealprep_core::{normalize_path, Icon, RouteEntry};

/// Maximum number of entries kept for back navigation
pub const MAX_HISTORY: usize = 50;

/// A sidebar link derived from a route entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub active: bool,
}

impl NavLink {
    pub fn is_current(&self) -> bool {
        self.active
    }

    /// Current-page marker, present only on the active link
    pub fn aria_current(&self) -> Option<&'static str> {
        self.active.then_some("page")
    }

    pub fn accessible_label(&self) -> &'static str {
        self.label
    }
}

/// Build the sidebar link list for the current path.
///
/// At most one link is active; none when `current_path` is not a sidebar
/// route (settings, login, not found).
pub fn render_nav<'a>(
    routes: impl IntoIterator<Item = &'a RouteEntry>,
    current_path: &str,
) -> Vec<NavLink> {
    let current = normalize_path(current_path);
    routes
        .into_iter()
        .map(|route| NavLink {
            path: route.path,
            label: route.label,
            icon: route.icon,
            active: route.path == current,
        })
        .collect()
}

/// Binary open/closed state of a disclosure widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclosure {
    Open,
    #[default]
    Closed,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        matches!(self, Disclosure::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Disclosure::Open => Disclosure::Closed,
            Disclosure::Closed => Disclosure::Open,
        };
    }

    pub fn open(&mut self) {
        *self = Disclosure::Open;
    }

    /// Close; returns true if the state changed
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Disclosure::Closed;
        was_open
    }
}

/// Bounded back-navigation stack
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.entries.last() == Some(&path) {
            return;
        }
        if self.entries.len() == MAX_HISTORY {
            self.entries.remove(0);
        }
        self.entries.push(path);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
