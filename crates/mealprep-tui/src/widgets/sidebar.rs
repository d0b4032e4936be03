//! Sidebar navigation widget
//!
//! Renders the sidebar routes as a link list. The link matching the current
//! route carries the active marker; the highlighted link is drawn inverted
//! while the sidebar holds focus.

use mealprep_app::navigation::NavLink;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::layout::sidebar_link_rect;
use crate::theme::{icons::IconSet, palette, styles};

pub struct Sidebar<'a> {
    links: &'a [NavLink],
    selected: usize,
    focused: bool,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(links: &'a [NavLink], icons: IconSet) -> Self {
        Self {
            links,
            selected: 0,
            focused: false,
            icons,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn link_line(&self, index: usize, link: &NavLink) -> Line<'static> {
        let marker = if link.is_current() {
            self.icons.active_marker()
        } else {
            " "
        };

        let style = if self.focused && index == self.selected {
            styles::focused_selected()
        } else if link.is_current() {
            styles::link_active()
        } else {
            styles::text_primary()
        };

        Line::from(vec![
            Span::styled(format!("{} ", marker), styles::accent()),
            Span::styled(
                format!("{} {}", self.icons.glyph(link.icon), link.label),
                style,
            ),
            Span::styled(format!("  {}", index + 1), styles::text_muted()),
        ])
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(" Navigation ")
            .style(Style::default().bg(palette::CARD_BG));
        block.render(area, buf);

        for (index, link) in self.links.iter().enumerate() {
            let Some(row) = sidebar_link_rect(area, index) else {
                break;
            };
            self.link_line(index, link).render(row, buf);
        }
    }
}
