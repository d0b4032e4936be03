//! Page registry - the static list of routes driving both the router and the sidebar
//!
//! Routes are declared once in [`ROUTES`]. The sidebar shows the entries with
//! `in_sidebar` set, in declaration order, which is the canonical display
//! order: Dashboard, Recipes, Meal Plans, Shopping List, Items.

use serde::Serialize;

use crate::types::Icon;

/// Application name used in document titles
pub const APP_NAME: &str = "MealPrepper";

/// Route path constants
pub mod paths {
    pub const DASHBOARD: &str = "/";
    pub const RECIPES: &str = "/recipes";
    pub const MEAL_PLANS: &str = "/meal-plans";
    pub const SHOPPING_LIST: &str = "/shopping-list";
    pub const ITEMS: &str = "/items";
    pub const SETTINGS: &str = "/settings";
    pub const LOGIN: &str = "/login";
}

/// A registered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// Unique route path
    pub path: &'static str,
    /// Human-readable label, used for sidebar links and page titles
    pub label: &'static str,
    /// Whether a session token is needed to view the page
    pub requires_auth: bool,
    /// Sidebar icon
    pub icon: Icon,
    /// Whether the page is listed in the sidebar
    pub in_sidebar: bool,
    /// Page is only for signed-out users (signed-in users are sent home)
    pub guest_only: bool,
}

impl RouteEntry {
    /// Document title, e.g. `"Recipes - MealPrepper"`
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.label, APP_NAME)
    }
}

/// Every registered route. Sidebar entries come first, in display order.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: paths::DASHBOARD,
        label: "Dashboard",
        requires_auth: true,
        icon: Icon::Home,
        in_sidebar: true,
        guest_only: false,
    },
    RouteEntry {
        path: paths::RECIPES,
        label: "Recipes",
        requires_auth: true,
        icon: Icon::Utensils,
        in_sidebar: true,
        guest_only: false,
    },
    RouteEntry {
        path: paths::MEAL_PLANS,
        label: "Meal Plans",
        requires_auth: true,
        icon: Icon::Calendar,
        in_sidebar: true,
        guest_only: false,
    },
    RouteEntry {
        path: paths::SHOPPING_LIST,
        label: "Shopping List",
        requires_auth: true,
        icon: Icon::ShoppingCart,
        in_sidebar: true,
        guest_only: false,
    },
    RouteEntry {
        path: paths::ITEMS,
        label: "Items",
        requires_auth: true,
        icon: Icon::Briefcase,
        in_sidebar: true,
        guest_only: false,
    },
    RouteEntry {
        path: paths::SETTINGS,
        label: "User Settings",
        requires_auth: true,
        icon: Icon::Settings,
        in_sidebar: false,
        guest_only: false,
    },
    RouteEntry {
        path: paths::LOGIN,
        label: "Log In",
        requires_auth: false,
        icon: Icon::LogIn,
        in_sidebar: false,
        guest_only: true,
    },
];

/// All registered routes, in registry order
pub fn list_routes() -> &'static [RouteEntry] {
    ROUTES
}

/// The routes shown in the sidebar, in canonical display order
pub fn sidebar_routes() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES.iter().filter(|r| r.in_sidebar)
}

/// Look up a route by path (after normalization)
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Normalize a user-supplied path: ensure a leading slash, drop query and
/// fragment, and strip trailing slashes (except for the root).
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return paths::DASHBOARD.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
