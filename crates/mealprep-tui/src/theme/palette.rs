//! Color palette for the dashboard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Menu/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Green;

// --- Accent ---
pub const ACCENT: Color = Color::Green; // Brand green
pub const ACCENT_SECONDARY: Color = Color::LightYellow;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

/// Foreground on an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
