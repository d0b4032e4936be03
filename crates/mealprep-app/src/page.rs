//! Page model: what is shown for a given path
//!
//! [`resolve`] maps a path to a [`PageKind`]; [`PageDocument`] is the
//! renderer-independent description of a page (title, headings, text, links)
//! used by the headless runner and by tests that check page content without
//! drawing it.

use serde::Serialize;

use mealprep_core::{
    find, normalize_path, paths, sidebar_routes, Heading, HeadingLevel, Session, APP_NAME,
};

use crate::dashboard::{
    self, DashboardStats, ACTIVITY_HEADING, GET_STARTED_HEADING, GET_STARTED_LINK,
    GET_STARTED_TEST_ID, GET_STARTED_TEXT, QUICK_ACTIONS, QUICK_ACTIONS_HEADING, WELCOME_TEXT,
};
use crate::navigation::{render_nav, NavLink};

pub const NOT_FOUND_HEADING: &str = "404 · Not Found";
pub const NOT_FOUND_TEXT: &str = "The page you are looking for does not exist.";
pub const BACK_TO_DASHBOARD: &str = "Back to Dashboard";
pub const SETTINGS_HEADING: &str = "User Settings";
pub const LOGIN_HEADING: &str = "Log In";
pub const LOGIN_TEXT: &str = "Sign in to plan your meals.";

/// The kind of page shown for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Dashboard,
    /// A feature page that only shows "coming soon" text
    Placeholder {
        label: &'static str,
        text: &'static str,
    },
    Settings,
    Login,
    NotFound,
}

/// "Coming soon" text of a placeholder page
pub fn placeholder_text(path: &str) -> Option<&'static str> {
    match path {
        paths::RECIPES => Some("Manage and explore your recipe library. This page is coming soon!"),
        paths::MEAL_PLANS => {
            Some("Create and manage your weekly meal plans. This page is coming soon!")
        }
        paths::SHOPPING_LIST => {
            Some("Manage your shopping list based on your meal plans. This page is coming soon!")
        }
        paths::ITEMS => Some("Manage your food items. This page is coming soon!"),
        _ => None,
    }
}

/// Map a path to the page shown there
pub fn resolve(path: &str) -> PageKind {
    let Some(route) = find(path) else {
        return PageKind::NotFound;
    };

    match route.path {
        paths::DASHBOARD => PageKind::Dashboard,
        paths::SETTINGS => PageKind::Settings,
        paths::LOGIN => PageKind::Login,
        other => match placeholder_text(other) {
            Some(text) => PageKind::Placeholder {
                label: route.label,
                text,
            },
            None => PageKind::NotFound,
        },
    }
}

impl PageKind {
    /// Whether the sidebar and top bar frame the page
    pub fn has_shell(&self) -> bool {
        !matches!(self, PageKind::Login)
    }
}

/// An activatable element in the page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusTarget {
    pub label: String,
    /// Announced name; names the card as well as its link on the dashboard
    pub accessible_label: String,
    pub href: &'static str,
    pub test_id: Option<&'static str>,
}

/// Content links of a page in focus order
pub fn focus_targets(kind: &PageKind) -> Vec<FocusTarget> {
    match kind {
        PageKind::Dashboard => QUICK_ACTIONS
            .iter()
            .map(|a| FocusTarget {
                label: a.action_label.to_string(),
                accessible_label: a.accessible_label(),
                href: a.href,
                test_id: Some(a.test_id),
            })
            .chain(std::iter::once(FocusTarget {
                label: GET_STARTED_LINK.to_string(),
                accessible_label: GET_STARTED_LINK.to_string(),
                href: paths::RECIPES,
                test_id: Some(GET_STARTED_TEST_ID),
            }))
            .collect(),
        PageKind::NotFound => vec![FocusTarget {
            label: BACK_TO_DASHBOARD.to_string(),
            accessible_label: BACK_TO_DASHBOARD.to_string(),
            href: paths::DASHBOARD,
            test_id: Some("not-found-back"),
        }],
        PageKind::Placeholder { .. } | PageKind::Settings | PageKind::Login => Vec::new(),
    }
}

/// Renderer-independent description of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDocument {
    pub path: String,
    pub title: String,
    pub kind: PageKind,
    pub headings: Vec<Heading>,
    pub text: Vec<String>,
    pub nav: Vec<NavLink>,
    pub focus_targets: Vec<FocusTarget>,
}

impl PageDocument {
    /// Build the document for `path` as seen by `session`
    pub fn build(path: &str, session: &Session, stats: &DashboardStats) -> Self {
        let path = normalize_path(path);
        let kind = resolve(&path);
        let title = match find(&path) {
            Some(route) => route.document_title(),
            None => format!("Not Found - {}", APP_NAME),
        };

        let mut headings = Vec::new();
        let mut text = Vec::new();

        match kind {
            PageKind::Dashboard => {
                headings.push(Heading::new(
                    HeadingLevel::H1,
                    dashboard::greeting(session.user()),
                ));
                text.push(WELCOME_TEXT.to_string());

                headings.push(Heading::new(HeadingLevel::H2, ACTIVITY_HEADING));
                for card in dashboard::stat_cards(stats) {
                    text.push(format!("{}: {}", card.label, card.value));
                }

                headings.push(Heading::new(HeadingLevel::H2, QUICK_ACTIONS_HEADING));
                for action in &QUICK_ACTIONS {
                    text.push(action.title.to_string());
                    if let Some(description) = action.description {
                        text.push(description.to_string());
                    }
                }

                headings.push(Heading::new(HeadingLevel::H3, GET_STARTED_HEADING));
                text.push(GET_STARTED_TEXT.to_string());
            }
            PageKind::Placeholder { label, text: body } => {
                headings.push(Heading::new(HeadingLevel::H1, label));
                text.push(body.to_string());
            }
            PageKind::Settings => {
                headings.push(Heading::new(HeadingLevel::H1, SETTINGS_HEADING));
                if let Some(user) = session.user() {
                    text.push(format!(
                        "Full name: {}",
                        user.full_name.as_deref().unwrap_or("N/A")
                    ));
                    text.push(format!("Email: {}", user.email));
                }
            }
            PageKind::Login => {
                headings.push(Heading::new(HeadingLevel::H1, LOGIN_HEADING));
                text.push(LOGIN_TEXT.to_string());
            }
            PageKind::NotFound => {
                headings.push(Heading::new(HeadingLevel::H1, NOT_FOUND_HEADING));
                text.push(NOT_FOUND_TEXT.to_string());
            }
        }

        let nav = if kind.has_shell() {
            render_nav(sidebar_routes(), &path)
        } else {
            Vec::new()
        };

        Self {
            focus_targets: focus_targets(&kind),
            path,
            title,
            kind,
            headings,
            text,
            nav,
        }
    }

    /// All visible strings: headings, text, link labels
    pub fn visible_text(&self) -> Vec<&str> {
        self.headings
            .iter()
            .map(|h| h.text.as_str())
            .chain(self.text.iter().map(String::as_str))
            .chain(self.nav.iter().map(|l| l.label))
            .chain(self.focus_targets.iter().map(|t| t.label.as_str()))
            .collect()
    }

    pub fn h1(&self) -> Option<&str> {
        self.headings
            .iter()
            .find(|h| h.level == HeadingLevel::H1)
            .map(|h| h.text.as_str())
    }

    pub fn headings_at(&self, level: HeadingLevel) -> Vec<&str> {
        self.headings
            .iter()
            .filter(|h| h.level == level)
            .map(|h| h.text.as_str())
            .collect()
    }
}
