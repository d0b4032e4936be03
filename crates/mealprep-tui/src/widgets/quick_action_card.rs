//! Quick action card widget
//!
//! Icon and title on the first row, the action link on the last row, the
//! wrapped description in between when there is room for it.

use mealprep_app::dashboard::QuickActionDescriptor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{BorderType, Widget},
};

use crate::theme::{icons::IconSet, styles};

use super::wrap_lines;

pub struct QuickActionCard<'a> {
    action: &'a QuickActionDescriptor,
    selected: bool,
    icons: IconSet,
}

impl<'a> QuickActionCard<'a> {
    pub fn new(action: &'a QuickActionDescriptor, icons: IconSet) -> Self {
        Self {
            action,
            selected: false,
            icons,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for QuickActionCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let variant = styles::card_variant(self.action.variant);
        let block = styles::glass_block(self.selected).border_style(if self.selected {
            styles::border_active()
        } else {
            variant
        });
        let block = if self.selected {
            block.border_type(BorderType::Thick)
        } else {
            block
        };
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![
            Span::styled(format!("{} ", self.icons.glyph(self.action.icon)), variant),
            Span::styled(self.action.title, styles::heading_primary()),
        ];
        if let Some(badge) = self.action.badge {
            title.push(Span::styled(format!(" [{}]", badge), styles::keybinding()));
        }
        Line::from(title).render(Rect { height: 1, ..inner }, buf);

        if inner.height < 2 {
            return;
        }

        let action_style = if self.selected {
            styles::focused_selected()
        } else {
            styles::accent()
        };
        let action_row = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        Line::from(Span::styled(
            format!("→ {}", self.action.action_label),
            action_style,
        ))
        .render(action_row, buf);

        let description_rows = inner.height.saturating_sub(2);
        if let (Some(description), true) = (self.action.description, description_rows > 0) {
            for (offset, line) in wrap_lines(description, inner.width)
                .into_iter()
                .take(usize::from(description_rows))
                .enumerate()
            {
                Line::from(Span::styled(line, styles::text_secondary())).render(
                    Rect::new(inner.x, inner.y + 1 + offset as u16, inner.width, 1),
                    buf,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use mealprep_app::dashboard::QUICK_ACTIONS;

    #[test]
    fn test_card_shows_title_description_and_action() {
        let mut term = TestTerminal::with_size(30, 6);
        term.render_widget(
            QuickActionCard::new(&QUICK_ACTIONS[1], IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(1, "Create Meal Plan"));
        assert!(term.line_contains(2, "Plan your weekly meals"));
        assert!(term.line_contains(4, "→ Create Plan"));
    }

    #[test]
    fn test_compact_card_skips_description() {
        let mut term = TestTerminal::with_size(30, 4);
        term.render_widget(
            QuickActionCard::new(&QUICK_ACTIONS[0], IconSet::default()),
            term.area(),
        );

        assert!(term.line_contains(1, "View Recipes"));
        assert!(term.line_contains(2, "→ View Recipes"));
        assert!(!term.buffer_contains("Browse"));
    }

    #[test]
    fn test_selected_card_highlights_action() {
        let mut term = TestTerminal::with_size(30, 4);
        term.render_widget(
            QuickActionCard::new(&QUICK_ACTIONS[3], IconSet::default()).selected(true),
            term.area(),
        );

        assert_eq!(term.buffer()[(1, 2)].bg, palette::ACCENT);
        assert!(term.buffer_contains("View Items"));
    }
}
