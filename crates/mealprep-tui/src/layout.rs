//! Screen layout definitions for the TUI
//!
//! Provides responsive layout calculations for the dashboard shell. The
//! viewport decides how the sidebar is placed: a fixed column on tablet and
//! desktop, a toggleable overlay panel on mobile.
//!
//! Every region that reacts to a mouse click is computed here so that the
//! renderer and [`crate::hit_map`] agree on where things are.

use mealprep_core::Viewport;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::overlay::centered;

/// Top bar: border + title row + border
pub const TOP_BAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub const SIDEBAR_WIDTH_DESKTOP: u16 = 26;
pub const SIDEBAR_WIDTH_TABLET: u16 = 22;
/// Maximum width of the mobile overlay panel
pub const SIDEBAR_WIDTH_MOBILE: u16 = 26;

/// User menu popup: border + two entries + border
pub const USER_MENU_WIDTH: u16 = 20;
pub const USER_MENU_HEIGHT: u16 = 4;

/// Width of the hamburger button (`[≡]`)
pub const HAMBURGER_WIDTH: u16 = 3;

pub const LOGIN_FORM_WIDTH: u16 = 44;
pub const LOGIN_FORM_HEIGHT: u16 = 13;

/// Screen areas for the dashboard shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// App title, hamburger (mobile) and user menu trigger
    pub top_bar: Rect,

    /// Sidebar links, if currently on screen
    pub sidebar: Option<Rect>,

    /// Page content
    pub content: Rect,

    /// Key hints
    pub status_bar: Rect,

    /// Whether the sidebar is drawn over the content (mobile panel)
    pub sidebar_overlay: bool,
}

/// Sidebar column width for a viewport
pub fn sidebar_width(viewport: Viewport) -> u16 {
    match viewport {
        Viewport::Desktop => SIDEBAR_WIDTH_DESKTOP,
        Viewport::Tablet => SIDEBAR_WIDTH_TABLET,
        Viewport::Mobile => SIDEBAR_WIDTH_MOBILE,
    }
}

/// Create the shell layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `viewport` - Width class of the terminal
/// * `sidebar_visible` - Whether the sidebar links are shown (always true
///   off mobile; the panel state on mobile)
pub fn create(area: Rect, viewport: Viewport, sidebar_visible: bool) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(area);

    let (top_bar, body, status_bar) = (chunks[0], chunks[1], chunks[2]);

    if viewport.has_collapsible_sidebar() {
        let sidebar = sidebar_visible.then(|| Rect {
            width: SIDEBAR_WIDTH_MOBILE.min(body.width),
            ..body
        });
        return ScreenAreas {
            top_bar,
            sidebar,
            content: body,
            status_bar,
            sidebar_overlay: true,
        };
    }

    let columns = Layout::horizontal([
        Constraint::Length(sidebar_width(viewport)),
        Constraint::Min(0),
    ])
    .split(body);

    ScreenAreas {
        top_bar,
        sidebar: Some(columns[0]),
        content: columns[1],
        status_bar,
        sidebar_overlay: false,
    }
}

/// First row inside the top bar border
fn top_bar_row(top_bar: Rect) -> Rect {
    Rect::new(
        top_bar.x.saturating_add(1),
        top_bar.y.saturating_add(1),
        top_bar.width.saturating_sub(2),
        top_bar.height.saturating_sub(2).min(1),
    )
}

/// The hamburger button at the left of the top bar (mobile only)
pub fn hamburger_rect(top_bar: Rect) -> Rect {
    let row = top_bar_row(top_bar);
    Rect {
        width: HAMBURGER_WIDTH.min(row.width),
        ..row
    }
}

/// The user menu trigger, right-aligned in the top bar
pub fn menu_trigger_rect(top_bar: Rect, label_width: u16) -> Rect {
    let row = top_bar_row(top_bar);
    let width = label_width.min(row.width);
    Rect {
        x: row.right().saturating_sub(width),
        width,
        ..row
    }
}

/// The open user menu, hanging below the right end of the top bar
pub fn user_menu_rect(area: Rect, top_bar: Rect) -> Rect {
    let width = USER_MENU_WIDTH.min(area.width);
    let x = top_bar.right().saturating_sub(width + 1).max(area.x);
    let rect = Rect::new(x, top_bar.bottom(), width, USER_MENU_HEIGHT);
    rect.intersection(area)
}

/// Row of the `index`th entry inside the user menu
pub fn user_menu_item_rect(menu: Rect, index: usize) -> Option<Rect> {
    row_inside(menu, index)
}

/// Row of the `index`th link inside the sidebar
pub fn sidebar_link_rect(sidebar: Rect, index: usize) -> Option<Rect> {
    row_inside(sidebar, index)
}

/// The `index`th one-line row inside a bordered block, if it fits
fn row_inside(block: Rect, index: usize) -> Option<Rect> {
    let index = u16::try_from(index).ok()?;
    let y = block.y.checked_add(1)?.checked_add(index)?;
    if y >= block.bottom().saturating_sub(1) {
        return None;
    }
    Some(Rect::new(
        block.x.saturating_add(1),
        y,
        block.width.saturating_sub(2),
        1,
    ))
}

/// The login form, centered on the screen
pub fn login_form_rect(area: Rect) -> Rect {
    centered(LOGIN_FORM_WIDTH, LOGIN_FORM_HEIGHT, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_layout_has_fixed_sidebar() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area, Viewport::Desktop, true);

        assert_eq!(layout.top_bar.height, TOP_BAR_HEIGHT);
        assert_eq!(layout.status_bar.height, STATUS_BAR_HEIGHT);
        assert_eq!(layout.status_bar.y, 39);

        let sidebar = layout.sidebar.expect("sidebar on desktop");
        assert_eq!(sidebar.width, SIDEBAR_WIDTH_DESKTOP);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH_DESKTOP);
        assert_eq!(layout.content.width, 120 - SIDEBAR_WIDTH_DESKTOP);
        assert!(!layout.sidebar_overlay);
    }

    #[test]
    fn test_tablet_layout_uses_narrower_sidebar() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, Viewport::Tablet, true);

        assert_eq!(layout.sidebar.map(|s| s.width), Some(SIDEBAR_WIDTH_TABLET));
        assert_eq!(layout.content.width, 80 - SIDEBAR_WIDTH_TABLET);
    }

    #[test]
    fn test_mobile_layout_content_spans_full_width() {
        let area = Rect::new(0, 0, 40, 30);

        let closed = create(area, Viewport::Mobile, false);
        assert_eq!(closed.sidebar, None);
        assert_eq!(closed.content.width, 40);

        let open = create(area, Viewport::Mobile, true);
        assert!(open.sidebar_overlay);
        assert_eq!(open.content.width, 40);
        let panel = open.sidebar.expect("open panel");
        assert_eq!(panel.x, 0);
        assert_eq!(panel.y, TOP_BAR_HEIGHT);
        assert_eq!(panel.width, SIDEBAR_WIDTH_MOBILE);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, Viewport::Tablet, true);
        assert_eq!(
            layout.top_bar.height + layout.content.height + layout.status_bar.height,
            area.height
        );
    }

    #[test]
    fn test_hamburger_and_trigger_sit_on_the_title_row() {
        let top_bar = Rect::new(0, 0, 40, TOP_BAR_HEIGHT);

        let hamburger = hamburger_rect(top_bar);
        assert_eq!(hamburger, Rect::new(1, 1, HAMBURGER_WIDTH, 1));

        let trigger = menu_trigger_rect(top_bar, 10);
        assert_eq!(trigger, Rect::new(29, 1, 10, 1));
        assert!(!trigger.intersects(hamburger));
    }

    #[test]
    fn test_user_menu_hangs_below_trigger() {
        let area = Rect::new(0, 0, 80, 24);
        let top_bar = Rect::new(0, 0, 80, TOP_BAR_HEIGHT);
        let menu = user_menu_rect(area, top_bar);

        assert_eq!(menu.y, TOP_BAR_HEIGHT);
        assert_eq!(menu.width, USER_MENU_WIDTH);
        assert_eq!(menu.right(), 79);
        assert_eq!(menu.height, USER_MENU_HEIGHT);
    }

    #[test]
    fn test_user_menu_item_rows() {
        let menu = Rect::new(59, 3, USER_MENU_WIDTH, USER_MENU_HEIGHT);
        assert_eq!(user_menu_item_rect(menu, 0), Some(Rect::new(60, 4, 18, 1)));
        assert_eq!(user_menu_item_rect(menu, 1), Some(Rect::new(60, 5, 18, 1)));
        assert_eq!(user_menu_item_rect(menu, 2), None);
    }

    #[test]
    fn test_sidebar_link_rows_stop_at_border() {
        let sidebar = Rect::new(0, 3, 22, 5);
        assert!(sidebar_link_rect(sidebar, 2).is_some());
        assert_eq!(sidebar_link_rect(sidebar, 3), None);
    }

    #[test]
    fn test_login_form_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let form = login_form_rect(area);
        assert_eq!(form.width, LOGIN_FORM_WIDTH);
        assert_eq!(form.x, (80 - LOGIN_FORM_WIDTH) / 2);
    }
}
