//! Dashboard page widget
//!
//! The dashboard is laid out on a virtual canvas as tall as its content and
//! then copied into the visible content area starting at a scroll offset.
//! The offset keeps the highlighted link on screen, so on a phone-sized
//! terminal every quick action card can be reached by moving the selection.

use mealprep_app::dashboard::{
    self, DashboardStats, ACTIVITY_HEADING, GET_STARTED_HEADING, GET_STARTED_LINK,
    GET_STARTED_TEXT, QUICK_ACTIONS, QUICK_ACTIONS_HEADING, WELCOME_TEXT,
};
use mealprep_core::{CurrentUser, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

use super::{wrap_lines, QuickActionCard, StatCard};

/// Card heights (borders included)
const STAT_HEIGHT: u16 = 4;
const STAT_HEIGHT_COMPACT: u16 = 3;
const CARD_HEIGHT: u16 = 6;
const CARD_HEIGHT_COMPACT: u16 = 4;

/// Section positions on the virtual canvas, relative to its top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardLayout {
    pub greeting: Rect,
    pub welcome: Rect,
    pub activity_heading: Rect,
    pub stats: Vec<Rect>,
    pub actions_heading: Rect,
    pub cards: Vec<Rect>,
    pub get_started: Rect,
    /// Row of the "Create Your First Recipe" link
    pub get_started_link: Rect,
    /// Total canvas height
    pub height: u16,
}

impl DashboardLayout {
    pub fn new(width: u16, viewport: Viewport) -> Self {
        let compact = viewport == Viewport::Mobile;
        let row = |y: u16| Rect::new(0, y, width, 1);

        let greeting = row(0);
        let welcome = row(1);
        let activity_heading = row(3);

        let stat_height = if compact {
            STAT_HEIGHT_COMPACT
        } else {
            STAT_HEIGHT
        };
        let (stats, next_y) = grid(3, viewport.stat_columns(), stat_height, width, 4);

        let actions_heading = row(next_y + 1);
        let card_height = if compact {
            CARD_HEIGHT_COMPACT
        } else {
            CARD_HEIGHT
        };
        let (cards, next_y) = grid(
            QUICK_ACTIONS.len(),
            viewport.quick_action_columns(),
            card_height,
            width,
            next_y + 2,
        );

        let text_rows = wrap_lines(GET_STARTED_TEXT, width.saturating_sub(2)).len() as u16;
        // border + heading + text + link + border
        let get_started = Rect::new(0, next_y + 1, width, text_rows + 4);
        let get_started_link = Rect::new(
            1,
            get_started.bottom().saturating_sub(2),
            width.saturating_sub(2),
            1,
        );

        Self {
            greeting,
            welcome,
            activity_heading,
            stats,
            actions_heading,
            cards,
            height: get_started.bottom(),
            get_started,
            get_started_link,
        }
    }

    /// Rects of the activatable links, in focus order
    pub fn targets(&self) -> Vec<Rect> {
        self.cards
            .iter()
            .copied()
            .chain(std::iter::once(self.get_started_link))
            .collect()
    }

    /// Scroll offset that keeps the selected target inside `view_height` rows
    pub fn scroll_offset(&self, selected: Option<usize>, view_height: u16) -> u16 {
        let Some(target) = selected.and_then(|i| self.targets().get(i).copied()) else {
            return 0;
        };
        let target = if target == self.get_started_link {
            self.get_started
        } else {
            target
        };
        target
            .bottom()
            .saturating_sub(view_height)
            .min(self.height.saturating_sub(view_height))
    }
}

/// Lay `count` equally sized cells out in rows of `columns`.
///
/// Returns the cells and the first row below the grid.
fn grid(count: usize, columns: usize, height: u16, width: u16, top: u16) -> (Vec<Rect>, u16) {
    let columns = columns.max(1);
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let mut cells = Vec::with_capacity(count);
    let mut y = top;

    for chunk in (0..count).collect::<Vec<_>>().chunks(columns) {
        let row = Layout::horizontal(constraints.clone()).split(Rect::new(0, y, width, height));
        cells.extend(row.iter().take(chunk.len()).copied());
        y += height;
    }

    (cells, y)
}

/// The dashboard page
pub struct DashboardView<'a> {
    user: Option<&'a CurrentUser>,
    stats: &'a DashboardStats,
    viewport: Viewport,
    /// Highlighted link while the content holds focus
    selected: Option<usize>,
    icons: IconSet,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        user: Option<&'a CurrentUser>,
        stats: &'a DashboardStats,
        viewport: Viewport,
        icons: IconSet,
    ) -> Self {
        Self {
            user,
            stats,
            viewport,
            selected: None,
            icons,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    fn render_canvas(&self, layout: &DashboardLayout, canvas: &mut Buffer) {
        Line::from(Span::styled(
            dashboard::greeting(self.user),
            styles::heading_primary(),
        ))
        .render(layout.greeting, canvas);
        Line::from(Span::styled(WELCOME_TEXT, styles::text_secondary()))
            .render(layout.welcome, canvas);

        Line::from(Span::styled(ACTIVITY_HEADING, styles::heading_section()))
            .render(layout.activity_heading, canvas);
        for (stat, area) in dashboard::stat_cards(self.stats).iter().zip(&layout.stats) {
            StatCard::new(stat, self.icons).render(*area, canvas);
        }

        Line::from(Span::styled(QUICK_ACTIONS_HEADING, styles::heading_section()))
            .render(layout.actions_heading, canvas);
        for (index, (action, area)) in QUICK_ACTIONS.iter().zip(&layout.cards).enumerate() {
            QuickActionCard::new(action, self.icons)
                .selected(self.selected == Some(index))
                .render(*area, canvas);
        }

        let panel = layout.get_started;
        let block = styles::glass_block(false);
        let inner = block.inner(panel);
        block.render(panel, canvas);
        Line::from(Span::styled(GET_STARTED_HEADING, styles::heading_section()))
            .render(Rect { height: 1, ..inner }, canvas);
        for (offset, line) in wrap_lines(GET_STARTED_TEXT, inner.width)
            .into_iter()
            .enumerate()
        {
            Line::from(Span::styled(line, styles::text_secondary())).render(
                Rect::new(inner.x, inner.y + 1 + offset as u16, inner.width, 1),
                canvas,
            );
        }

        let link_style = if self.selected == Some(QUICK_ACTIONS.len()) {
            styles::focused_selected()
        } else {
            styles::accent()
        };
        Line::from(Span::styled(format!("→ {}", GET_STARTED_LINK), link_style))
            .render(layout.get_started_link, canvas);
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = DashboardLayout::new(area.width, self.viewport);
        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, layout.height));
        self.render_canvas(&layout, &mut canvas);

        let offset = layout.scroll_offset(self.selected, area.height);
        for y in 0..area.height {
            let source_y = y + offset;
            if source_y >= layout.height {
                break;
            }
            for x in 0..area.width {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    *cell = canvas[(x, source_y)].clone();
                }
            }
        }
    }
}
