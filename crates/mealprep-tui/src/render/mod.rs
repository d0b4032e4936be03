//! Main render/view function (View in TEA pattern)


use mealprep_app::page::PageKind;
use mealprep_app::{AppState, Focus};
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{self, overlay::dim_behind, DashboardLayout, DocumentView};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function; it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);

    if !state.page_kind().has_shell() {
        frame.render_widget(
            widgets::LoginForm::new(&state.login),
            layout::login_form_rect(area),
        );
        let status = Rect {
            y: area.bottom().saturating_sub(1),
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(widgets::StatusBar::new(state), status);
        return;
    }

    let areas = layout::create(area, state.viewport, state.is_sidebar_visible());

    let top_bar = widgets::TopBar::new(state.viewport, state.session.user(), icons)
        .menu_open(state.nav.user_menu.is_open())
        .sidebar_open(state.nav.sidebar.is_open());
    frame.render_widget(top_bar, areas.top_bar);

    render_content(frame, state, areas.content, icons);

    if let Some(sidebar_area) = areas.sidebar {
        if areas.sidebar_overlay {
            dim_behind(frame.buffer_mut(), areas.content, sidebar_area);
        }
        let links = state.nav_links();
        let sidebar = widgets::Sidebar::new(&links, icons)
            .selected(state.sidebar_index)
            .focused(state.focus == Focus::Sidebar);
        frame.render_widget(sidebar, sidebar_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status_bar);

    if state.nav.user_menu.is_open() {
        frame.render_widget(
            widgets::UserMenuPopup::new(&state.nav.user_menu, icons),
            layout::user_menu_rect(area, areas.top_bar),
        );
    }
}

/// Padded page area inside the content region
pub fn page_area(content: Rect) -> Rect {
    content.inner(Margin {
        horizontal: 2,
        vertical: 1,
    })
}

/// Highlighted content link, if the content holds focus
fn selected_target(state: &AppState) -> Option<usize> {
    (state.focus == Focus::Content && !state.focus_targets().is_empty())
        .then_some(state.content_index)
}

fn render_content(frame: &mut Frame, state: &AppState, content: Rect, icons: IconSet) {
    let page = page_area(content);
    let selected = selected_target(state);

    match state.page_kind() {
        PageKind::Dashboard => {
            let dashboard = widgets::DashboardView::new(
                state.session.user(),
                &state.stats,
                state.viewport,
                icons,
            )
            .selected(selected);
            frame.render_widget(dashboard, page);
        }
        PageKind::Placeholder { .. } | PageKind::Settings | PageKind::NotFound => {
            let doc = state.document();
            frame.render_widget(DocumentView::new(&doc).selected(selected), page);
        }
        PageKind::Login => {}
    }
}

/// On-screen rects of the current page's links, paired with their index in
/// [`AppState::focus_targets`]. Links scrolled out of view are omitted.
pub fn content_target_rects(state: &AppState, content: Rect) -> Vec<(usize, Rect)> {
    let page = page_area(content);

    match state.page_kind() {
        PageKind::Dashboard => {
            let layout = DashboardLayout::new(page.width, state.viewport);
            let offset = layout.scroll_offset(selected_target(state), page.height);
            layout
                .targets()
                .into_iter()
                .enumerate()
                .filter_map(|(i, r)| place(r, page, offset).map(|r| (i, r)))
                .collect()
        }
        PageKind::NotFound => DocumentView::link_rects(&state.document(), page)
            .into_iter()
            .enumerate()
            .collect(),
        PageKind::Placeholder { .. } | PageKind::Settings | PageKind::Login => Vec::new(),
    }
}

/// Move a canvas rect into `page` scrolled by `offset`, clipped to the page
fn place(rect: Rect, page: Rect, offset: u16) -> Option<Rect> {
    let top = i32::from(page.y) + i32::from(rect.y) - i32::from(offset);
    let bottom = top + i32::from(rect.height);
    let top = top.max(i32::from(page.y));
    let bottom = bottom.min(i32::from(page.bottom()));
    if bottom <= top {
        return None;
    }

    let placed = Rect::new(
        page.x + rect.x,
        u16::try_from(top).ok()?,
        rect.width,
        u16::try_from(bottom - top).ok()?,
    );
    let placed = placed.intersection(page);
    (!placed.is_empty()).then_some(placed)
}
