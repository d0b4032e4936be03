//! Top bar widget
//!
//! App title on the left (after the hamburger button on mobile), the user
//! menu trigger on the right.

use mealprep_core::{CurrentUser, Icon, Viewport, APP_NAME};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{hamburger_rect, menu_trigger_rect};
use crate::theme::{icons::IconSet, palette, styles};

use super::truncate_to_width;

/// Longest display name shown in the trigger
const MAX_TRIGGER_NAME_WIDTH: usize = 16;

/// Shown when the session carries no profile
const FALLBACK_TRIGGER_NAME: &str = "Account";

/// Hamburger button text; fills exactly `HAMBURGER_WIDTH` cells
pub fn hamburger_label(icons: &IconSet) -> String {
    format!("[{}]", icons.glyph(Icon::Menu))
}

/// Visible text of the user menu trigger, e.g. `"◉ Ada ▾"`
pub fn trigger_label(user: Option<&CurrentUser>, icons: &IconSet, open: bool) -> String {
    let name = user
        .map(|u| u.display_name())
        .unwrap_or(FALLBACK_TRIGGER_NAME);
    format!(
        "{} {} {}",
        icons.glyph(Icon::User),
        truncate_to_width(name, MAX_TRIGGER_NAME_WIDTH),
        icons.caret(open)
    )
}

pub struct TopBar<'a> {
    viewport: Viewport,
    user: Option<&'a CurrentUser>,
    menu_open: bool,
    sidebar_open: bool,
    icons: IconSet,
}

impl<'a> TopBar<'a> {
    pub fn new(viewport: Viewport, user: Option<&'a CurrentUser>, icons: IconSet) -> Self {
        Self {
            viewport,
            user,
            menu_open: false,
            sidebar_open: false,
            icons,
        }
    }

    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    pub fn sidebar_open(mut self, open: bool) -> Self {
        self.sidebar_open = open;
        self
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title_x = inner.x;
        if self.viewport.has_collapsible_sidebar() {
            let hamburger = hamburger_rect(area);
            let style = if self.sidebar_open {
                styles::focused_selected()
            } else {
                styles::accent()
            };
            Line::from(Span::styled(hamburger_label(&self.icons), style)).render(hamburger, buf);
            title_x = hamburger.right().saturating_add(1);
        }

        let label = trigger_label(self.user, &self.icons, self.menu_open);
        let trigger = menu_trigger_rect(area, label.width() as u16);

        let title_width = trigger.x.saturating_sub(title_x);
        let title = Line::from(vec![
            Span::styled(
                format!("{} ", self.icons.glyph(Icon::ChefHat)),
                styles::accent(),
            ),
            Span::styled(APP_NAME, styles::accent_bold()),
        ]);
        title.render(Rect::new(title_x, inner.y, title_width, 1), buf);

        let trigger_style = if self.menu_open {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Line::from(Span::styled(label, trigger_style)).render(trigger, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HAMBURGER_WIDTH, TOP_BAR_HEIGHT};
    use crate::test_utils::{test_user, TestTerminal};
    use mealprep_core::IconMode;

    #[test]
    fn test_hamburger_label_fits_its_button() {
        for mode in [IconMode::Unicode, IconMode::NerdFonts] {
            let label = hamburger_label(&IconSet::new(mode));
            assert_eq!(label.width() as u16, HAMBURGER_WIDTH, "{:?}", mode);
        }
    }

    #[test]
    fn test_trigger_label_uses_display_name() {
        let icons = IconSet::default();
        assert_eq!(trigger_label(Some(&test_user()), &icons, false), "◉ Ada ▾");
        assert_eq!(
            trigger_label(Some(&CurrentUser::new("bo@example.com")), &icons, true),
            "◉ bo@example.com ▴"
        );
        assert_eq!(trigger_label(None, &icons, false), "◉ Account ▾");
    }

    #[test]
    fn test_trigger_label_truncates_long_names() {
        let user = CurrentUser::new("someone.with.a.long.address@example.com");
        let label = trigger_label(Some(&user), &IconSet::default(), false);
        assert!(label.contains('…'));
        assert!(label.width() <= MAX_TRIGGER_NAME_WIDTH + 4);
    }

    #[test]
    fn test_desktop_top_bar_has_title_and_trigger() {
        let user = test_user();
        let mut term = TestTerminal::with_size(120, TOP_BAR_HEIGHT);
        term.render_widget(
            TopBar::new(Viewport::Desktop, Some(&user), IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(1, "MealPrepper"));
        assert!(term.line_contains(1, "Ada ▾"));
        assert!(!term.line_contains(1, "[≡]"));
    }

    #[test]
    fn test_mobile_top_bar_has_hamburger() {
        let user = test_user();
        let mut term = TestTerminal::with_size(40, TOP_BAR_HEIGHT);
        term.render_widget(
            TopBar::new(Viewport::Mobile, Some(&user), IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(1, "[≡]"));
        assert!(term.line_contains(1, "MealPrepper"));
        assert!(term.line_contains(1, "Ada"));
    }

    #[test]
    fn test_open_menu_flips_caret() {
        let user = test_user();
        let mut term = TestTerminal::with_size(80, TOP_BAR_HEIGHT);
        term.render_widget(
            TopBar::new(Viewport::Tablet, Some(&user), IconSet::default()).menu_open(true),
            term.area(),
        );

        assert!(term.line_contains(1, "Ada ▴"));
    }
}
