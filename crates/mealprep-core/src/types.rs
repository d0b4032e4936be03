//! Shared domain types for the dashboard shell

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppPhase {
    /// Startup, before the first route has been resolved
    #[default]
    Initializing,
    /// Normal operation
    Running,
    /// Quit requested, event loop should exit
    Quitting,
}

/// Symbolic icon reference, resolved to glyphs by the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Home,
    Utensils,
    Calendar,
    ShoppingCart,
    Briefcase,
    ChefHat,
    Settings,
    LogOut,
    LogIn,
    User,
    Menu,
}

/// Visual variant of a quick action card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    #[default]
    Default,
    Secondary,
}

/// Visual variant of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatVariant {
    #[default]
    Default,
    Success,
    Warning,
    Info,
}

/// Width class standing in for the browser viewport.
///
/// The terminal width (in columns) is classified against two breakpoints:
/// everything up to `mobile_max` is mobile, up to `tablet_max` is tablet,
/// anything wider is desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn classify(width: u16, mobile_max: u16, tablet_max: u16) -> Self {
        if width <= mobile_max {
            Viewport::Mobile
        } else if width <= tablet_max {
            Viewport::Tablet
        } else {
            Viewport::Desktop
        }
    }

    /// Whether the sidebar collapses into a toggleable panel
    pub fn has_collapsible_sidebar(&self) -> bool {
        matches!(self, Viewport::Mobile)
    }

    /// Number of quick action card columns (grid-cols-1 / md:2 / lg:4)
    pub fn quick_action_columns(&self) -> usize {
        match self {
            Viewport::Mobile => 1,
            Viewport::Tablet => 2,
            Viewport::Desktop => 4,
        }
    }

    /// Number of stat card columns (grid-cols-1 / md:3)
    pub fn stat_columns(&self) -> usize {
        match self {
            Viewport::Mobile => 1,
            Viewport::Tablet | Viewport::Desktop => 3,
        }
    }
}

/// Heading level of a page landmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_number(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// A heading landmark exposed by a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Icon rendering mode for the TUI.
///
/// `Unicode` works in every terminal; `NerdFonts` needs a patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}
