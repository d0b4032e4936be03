//! Message types for the application (TEA pattern)

use mealprep_core::{CurrentUser, SessionToken};

use crate::dashboard::DashboardStats;
use crate::input_key::InputKey;
use crate::login::LoginField;
use crate::user_menu::UserMenuItem;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal or headless input
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    /// Terminal resized; the width selects the viewport
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Go to a path (checked by the session guard)
    Navigate { path: String },
    /// Return to the previous page
    NavigateBack,
    /// Jump to the nth sidebar entry (0-based)
    NavigateToSidebarIndex(usize),
    /// Activate a content link by test id or label
    ActivateTarget(String),

    // ─────────────────────────────────────────────────────────
    // Sidebar / Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Flip the mobile sidebar panel (inert on wider viewports)
    ToggleSidebar,
    /// Close the mobile sidebar panel
    CloseSidebar,
    /// Move focus between the sidebar and the page content
    CycleFocus,
    /// Move the highlight in the focused region up
    SelectPrevious,
    /// Move the highlight in the focused region down
    SelectNext,
    /// Activate the highlighted entry of the focused region
    ActivateSelection,

    // ─────────────────────────────────────────────────────────
    // User Menu Messages
    // ─────────────────────────────────────────────────────────
    /// Trigger button pressed
    ToggleUserMenu,
    /// Outside interaction (Esc, click elsewhere)
    DismissUserMenu,
    UserMenuUp,
    UserMenuDown,
    /// Activate the highlighted menu entry
    ActivateUserMenuSelection,
    /// Activate a specific menu entry
    SelectUserMenuItem(UserMenuItem),

    // ─────────────────────────────────────────────────────────
    // Session Messages
    // ─────────────────────────────────────────────────────────
    /// Clear the session and go to the login page
    Logout,
    /// Type into a login field
    LoginInput(char),
    /// Delete the last character of the focused login field
    LoginBackspace,
    /// Move to the other login field
    SwitchLoginField,
    /// Replace a login field's content (headless input)
    SetLoginField { field: LoginField, value: String },
    /// Validate the form and start a login
    SubmitLogin,
    /// The auth provider accepted the credentials
    LoginSucceeded {
        token: SessionToken,
        user: CurrentUser,
    },
    /// The auth provider refused the credentials
    LoginFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Dashboard Messages
    // ─────────────────────────────────────────────────────────
    /// New counts for the "Your Activity" cards
    StatsUpdated(DashboardStats),
}
