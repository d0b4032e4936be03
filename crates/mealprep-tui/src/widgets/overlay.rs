//! Helpers for things drawn on top of the page
//!
//! The login form is centered on the screen, the mobile sidebar panel sits
//! over a dimmed page and the user menu popup casts a one-cell shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// A `width` x `height` rect centered in `area`, shrunk to fit.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use mealprep_tui::widgets::overlay::centered;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    rect
}

/// Push the page behind an open panel into the background, then clear the
/// cells the panel will cover.
pub fn dim_behind(buf: &mut Buffer, page: Rect, panel: Rect) {
    let page = page.intersection(buf.area);
    buf.set_style(
        page,
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG),
    );
    Clear.render(panel.intersection(buf.area), buf);
}

/// Clear the cells under a popup and draw its shadow one cell down and right
pub fn lift(buf: &mut Buffer, popup: Rect) {
    let bounds = buf.area;
    let right = Rect::new(popup.right(), popup.y.saturating_add(1), 1, popup.height);
    let below = Rect::new(popup.x.saturating_add(1), popup.bottom(), popup.width, 1);

    for edge in [right, below] {
        let edge = edge.intersection(bounds);
        for position in edge.positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ')
                    .set_style(Style::default().fg(palette::SHADOW).bg(palette::SHADOW));
            }
        }
    }

    Clear.render(popup.intersection(bounds), buf);
}
