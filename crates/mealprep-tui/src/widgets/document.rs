//! Generic page widget
//!
//! Renders a [`PageDocument`] as a heading, wrapped paragraphs and a list of
//! links. Used for the placeholder pages, the settings page and the
//! not-found page.

use mealprep_app::page::PageDocument;
use mealprep_core::HeadingLevel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::wrap_lines;

pub struct DocumentView<'a> {
    doc: &'a PageDocument,
    selected: Option<usize>,
}

impl<'a> DocumentView<'a> {
    pub fn new(doc: &'a PageDocument) -> Self {
        Self {
            doc,
            selected: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Rows of the document's links when drawn into `area`
    pub fn link_rects(doc: &PageDocument, area: Rect) -> Vec<Rect> {
        let first = area.y.saturating_add(Self::body_height(doc, area.width));
        (0..doc.focus_targets.len())
            .map(|i| Rect::new(area.x, first.saturating_add(i as u16), area.width, 1))
            .filter(|r| r.bottom() <= area.bottom())
            .collect()
    }

    /// Rows taken by headings and text, plus the gap before the links
    fn body_height(doc: &PageDocument, width: u16) -> u16 {
        let headings = doc.headings.len() as u16 * 2;
        let text: u16 = doc
            .text
            .iter()
            .map(|t| wrap_lines(t, width).len() as u16)
            .sum();
        headings + text + 1
    }
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for heading in &self.doc.headings {
            let style = match heading.level {
                HeadingLevel::H1 => styles::heading_primary(),
                HeadingLevel::H2 | HeadingLevel::H3 => styles::heading_section(),
            };
            lines.push(Line::from(Span::styled(heading.text.clone(), style)));
            lines.push(Line::default());
        }
        for paragraph in &self.doc.text {
            for line in wrap_lines(paragraph, area.width) {
                lines.push(Line::from(Span::styled(line, styles::text_secondary())));
            }
        }
        lines.push(Line::default());

        for (row, line) in lines.into_iter().enumerate() {
            let y = area.y.saturating_add(row as u16);
            if y >= area.bottom() {
                return;
            }
            line.render(Rect::new(area.x, y, area.width, 1), buf);
        }

        for (index, (target, row)) in self
            .doc
            .focus_targets
            .iter()
            .zip(Self::link_rects(self.doc, area))
            .enumerate()
        {
            let style = if self.selected == Some(index) {
                styles::focused_selected()
            } else {
                styles::accent()
            };
            Line::from(Span::styled(format!("→ {}", target.label), style)).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_user, TestTerminal};
    use mealprep_app::dashboard::DashboardStats;
    use mealprep_core::{Session, SessionToken};

    fn doc(path: &str) -> PageDocument {
        let session = Session::authenticated(SessionToken::new("t"), Some(test_user()));
        PageDocument::build(path, &session, &DashboardStats::default())
    }

    #[test]
    fn test_placeholder_page() {
        let doc = doc("/recipes");
        let mut term = TestTerminal::with_size(100, 10);
        term.render_widget(DocumentView::new(&doc), term.area());

        assert!(term.line_contains(0, "Recipes"));
        assert!(term.buffer_contains("coming soon"));
        assert!(!term.buffer_contains("→"));
    }

    #[test]
    fn test_settings_page_shows_profile() {
        let doc = doc("/settings");
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(DocumentView::new(&doc), term.area());

        assert!(term.line_contains(0, "User Settings"));
        assert!(term.buffer_contains("Full name: Ada"));
        assert!(term.buffer_contains("Email: ada@example.com"));
    }

    #[test]
    fn test_not_found_page_links_back() {
        let doc = doc("/does-not-exist");
        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(DocumentView::new(&doc).selected(Some(0)), term.area());

        assert!(term.line_contains(0, "404 · Not Found"));
        let rows = DocumentView::link_rects(&doc, term.area());
        assert_eq!(rows.len(), 1);
        assert!(term.line_contains(rows[0].y, "→ Back to Dashboard"));
    }

    #[test]
    fn test_links_that_do_not_fit_are_dropped() {
        let doc = doc("/does-not-exist");
        assert!(DocumentView::link_rects(&doc, Rect::new(0, 0, 60, 3)).is_empty());
    }
}
