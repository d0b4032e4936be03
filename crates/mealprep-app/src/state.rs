//! Application state (Model in TEA pattern)

use mealprep_core::{normalize_path, sidebar_routes, AppPhase, Session, Viewport};

use crate::config::Settings;
use crate::dashboard::DashboardStats;
use crate::login::LoginFormState;
use crate::navigation::{render_nav, Disclosure, History, NavLink};
use crate::page::{self, FocusTarget, PageDocument, PageKind};
use crate::user_menu::UserMenuState;

/// Input mode, derived from the current page and open overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal dashboard shell
    Normal,
    /// User menu open; keys go to the menu
    UserMenu,
    /// Login page; printable keys go to the form
    Login,
}

/// Region holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

/// A redirect applied by the session guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// Route, history and disclosure state
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub current_path: String,
    pub history: History,
    /// Collapsible sidebar panel (mobile only)
    pub sidebar: Disclosure,
    pub user_menu: UserMenuState,
    /// Where to go after a successful login
    pub redirect_after_login: Option<String>,
    /// Most recent guard redirect
    pub last_redirect: Option<Redirect>,
    /// Number of guard redirects so far
    pub redirect_count: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_path: mealprep_core::paths::DASHBOARD.to_string(),
            history: History::default(),
            sidebar: Disclosure::Closed,
            user_menu: UserMenuState::default(),
            redirect_after_login: None,
            last_redirect: None,
            redirect_count: 0,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub session: Session,
    pub nav: NavigationState,
    pub viewport: Viewport,
    pub terminal_size: (u16, u16),
    pub focus: Focus,
    /// Highlighted sidebar entry
    pub sidebar_index: usize,
    /// Highlighted content link
    pub content_index: usize,
    pub login: LoginFormState,
    pub stats: DashboardStats,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn current_path(&self) -> &str {
        &self.nav.current_path
    }

    pub fn page_kind(&self) -> PageKind {
        page::resolve(&self.nav.current_path)
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.page_kind() == PageKind::Login {
            UiMode::Login
        } else if self.nav.user_menu.is_open() {
            UiMode::UserMenu
        } else {
            UiMode::Normal
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Sidebar links for the current path
    pub fn nav_links(&self) -> Vec<NavLink> {
        render_nav(sidebar_routes(), &self.nav.current_path)
    }

    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        page::focus_targets(&self.page_kind())
    }

    /// Renderer-independent description of the current page
    pub fn document(&self) -> PageDocument {
        PageDocument::build(&self.nav.current_path, &self.session, &self.stats)
    }

    /// Whether the sidebar links are on screen
    pub fn is_sidebar_visible(&self) -> bool {
        if !self.page_kind().has_shell() {
            return false;
        }
        !self.viewport.has_collapsible_sidebar() || self.nav.sidebar.is_open()
    }

    /// Reclassify the viewport for a new terminal size.
    ///
    /// Returns true if the viewport class changed.
    pub fn apply_terminal_size(&mut self, width: u16, height: u16) -> bool {
        self.terminal_size = (width, height);
        let viewport = Viewport::classify(
            width,
            self.settings.ui.mobile_max_width,
            self.settings.ui.tablet_max_width,
        );
        if viewport == self.viewport {
            return false;
        }

        self.viewport = viewport;
        if !viewport.has_collapsible_sidebar() {
            self.nav.sidebar.close();
        }
        if !self.is_sidebar_visible() {
            self.focus = Focus::Content;
        }
        true
    }

    /// Set the current path and keep highlights in range
    pub(crate) fn set_current_path(&mut self, path: &str) {
        self.nav.current_path = normalize_path(path);
        self.content_index = 0;
        if let Some(index) = self.nav_links().iter().position(|l| l.is_current()) {
            self.sidebar_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealprep_core::{CurrentUser, SessionToken};

    #[test]
    fn test_default_state() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Initializing);
        assert_eq!(state.current_path(), "/");
        assert!(!state.nav.sidebar.is_open());
        assert!(!state.nav.user_menu.is_open());
        assert!(!state.session.is_authenticated());
    }

    #[test]
    fn test_ui_mode() {
        let mut state = AppState::new().with_session(Session::authenticated(
            SessionToken::new("t"),
            Some(CurrentUser::new("a@b.co")),
        ));
        assert_eq!(state.ui_mode(), UiMode::Normal);

        state.nav.user_menu.toggle();
        assert_eq!(state.ui_mode(), UiMode::UserMenu);

        state.set_current_path("/login");
        assert_eq!(state.ui_mode(), UiMode::Login);
    }

    #[test]
    fn test_apply_terminal_size_classifies() {
        let mut state = AppState::new();
        assert!(state.apply_terminal_size(40, 30));
        assert_eq!(state.viewport, Viewport::Mobile);
        assert!(!state.apply_terminal_size(50, 30));
        assert!(state.apply_terminal_size(80, 30));
        assert_eq!(state.viewport, Viewport::Tablet);
        assert!(state.apply_terminal_size(120, 30));
        assert_eq!(state.viewport, Viewport::Desktop);
    }

    #[test]
    fn test_widening_closes_mobile_panel() {
        let mut state = AppState::new();
        state.apply_terminal_size(40, 30);
        state.nav.sidebar.open();
        state.apply_terminal_size(120, 30);
        assert!(!state.nav.sidebar.is_open());
        assert!(state.is_sidebar_visible());
    }

    #[test]
    fn test_sidebar_visibility_on_mobile_follows_panel() {
        let mut state = AppState::new();
        state.apply_terminal_size(40, 30);
        assert!(!state.is_sidebar_visible());
        state.nav.sidebar.open();
        assert!(state.is_sidebar_visible());
    }

    #[test]
    fn test_set_current_path_syncs_sidebar_index() {
        let mut state = AppState::new();
        state.set_current_path("/shopping-list/");
        assert_eq!(state.current_path(), "/shopping-list");
        assert_eq!(state.sidebar_index, 3);
    }
}
