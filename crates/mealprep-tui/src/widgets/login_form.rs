//! Login form widget

use mealprep_app::login::{LoginField, LoginFormState};
use mealprep_app::page::{LOGIN_HEADING, LOGIN_TEXT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::truncate_to_width;

/// Row offsets inside the form border
const EMAIL_ROW: u16 = 3;
const PASSWORD_ROW: u16 = 6;
const ERROR_ROW: u16 = 8;
const BUTTON_ROW: u16 = 10;

pub const SUBMIT_LABEL: &str = "[ Log In ]";

pub struct LoginForm<'a> {
    form: &'a LoginFormState,
}

impl<'a> LoginForm<'a> {
    pub fn new(form: &'a LoginFormState) -> Self {
        Self { form }
    }

    fn inner_row(form: Rect, offset: u16) -> Rect {
        Rect::new(
            form.x.saturating_add(1),
            form.y.saturating_add(1 + offset),
            form.width.saturating_sub(2),
            1,
        )
    }

    /// Input row of a field inside the form rect
    pub fn field_rect(form: Rect, field: LoginField) -> Rect {
        match field {
            LoginField::Email => Self::inner_row(form, EMAIL_ROW),
            LoginField::Password => Self::inner_row(form, PASSWORD_ROW),
        }
    }

    /// The submit button inside the form rect
    pub fn submit_rect(form: Rect) -> Rect {
        Rect {
            width: (SUBMIT_LABEL.len() as u16).min(form.width.saturating_sub(2)),
            ..Self::inner_row(form, BUTTON_ROW)
        }
    }

    fn input_line(&self, value: String, field: LoginField, width: u16) -> Line<'static> {
        let focused = self.form.focused == field;
        let cursor = if focused { "▏" } else { "" };
        let shown = truncate_to_width(&value, usize::from(width.saturating_sub(3)));
        let style = if focused {
            styles::text_primary().bg(palette::POPUP_BG)
        } else {
            styles::text_secondary()
        };
        Line::from(vec![
            Span::styled("› ", styles::accent()),
            Span::styled(format!("{}{}", shown, cursor), style),
        ])
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" {} ", LOGIN_HEADING))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = |offset: u16| Self::inner_row(area, offset);
        let visible = |rect: Rect| rect.bottom() <= inner.bottom();

        let rows: Vec<(Rect, Line)> = vec![
            (
                row(0),
                Line::from(Span::styled(LOGIN_TEXT, styles::text_secondary())),
            ),
            (row(2), Line::from(Span::styled("Email", styles::heading_primary()))),
            (
                row(EMAIL_ROW),
                self.input_line(self.form.email.clone(), LoginField::Email, inner.width),
            ),
            (
                row(5),
                Line::from(Span::styled("Password", styles::heading_primary())),
            ),
            (
                row(PASSWORD_ROW),
                self.input_line(
                    self.form.masked_password(),
                    LoginField::Password,
                    inner.width,
                ),
            ),
        ];
        for (rect, line) in rows {
            if visible(rect) {
                line.render(rect, buf);
            }
        }

        let status = if self.form.submitting {
            Some(Span::styled("Signing in…", styles::text_muted()))
        } else {
            self.form
                .error
                .as_ref()
                .map(|e| Span::styled(e.clone(), styles::status_red()))
        };
        if let (Some(status), true) = (status, visible(row(ERROR_ROW))) {
            Line::from(status).render(row(ERROR_ROW), buf);
        }

        let submit = Self::submit_rect(area);
        if visible(submit) {
            Line::from(Span::styled(SUBMIT_LABEL, styles::focused_selected())).render(submit, buf);
        }
    }
}
