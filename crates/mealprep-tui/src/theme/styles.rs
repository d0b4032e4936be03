//! Semantic style builders for the dashboard theme.

use mealprep_core::{CardVariant, StatVariant};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Level-1 heading
pub fn heading_primary() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Level-2 and level-3 headings
pub fn heading_section() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Link styles ---

/// The link matching the current page
pub fn link_active() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Green" - focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected item in an unfocused region
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Variant mapping ---

/// Border and icon style of a quick action card
pub fn card_variant(variant: CardVariant) -> Style {
    match variant {
        CardVariant::Default => Style::default().fg(palette::ACCENT),
        CardVariant::Secondary => Style::default().fg(palette::ACCENT_SECONDARY),
    }
}

/// Value style of a stat card
pub fn stat_variant(variant: StatVariant) -> Style {
    let color = match variant {
        StatVariant::Default => palette::TEXT_PRIMARY,
        StatVariant::Success => palette::STATUS_GREEN,
        StatVariant::Warning => palette::STATUS_YELLOW,
        StatVariant::Info => palette::STATUS_BLUE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn popup_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}
