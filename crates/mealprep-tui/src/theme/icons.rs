//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves the symbolic [`Icon`] references of the
//! route registry and card descriptors based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use mealprep_core::{Icon, IconMode};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a symbolic icon
    pub fn glyph(&self, icon: Icon) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd_font_glyph(icon),
            IconMode::Unicode => unicode_glyph(icon),
        }
    }

    /// Marker in front of the active sidebar link
    pub fn active_marker(&self) -> &'static str {
        "▸"
    }

    /// Disclosure caret of the user menu trigger
    pub fn caret(&self, open: bool) -> &'static str {
        if open {
            "▴"
        } else {
            "▾"
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}

fn nerd_font_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "\u{f015}",         // nf-fa-home
        Icon::Utensils => "\u{f2e7}",     // nf-fa-utensils
        Icon::Calendar => "\u{f073}",     // nf-fa-calendar
        Icon::ShoppingCart => "\u{f07a}", // nf-fa-shopping_cart
        Icon::Briefcase => "\u{f0b1}",    // nf-fa-briefcase
        Icon::ChefHat => "\u{f0f5}",      // nf-fa-cutlery
        Icon::Settings => "\u{f013}",     // nf-fa-cog
        Icon::LogOut => "\u{f08b}",       // nf-fa-sign_out
        Icon::LogIn => "\u{f090}",        // nf-fa-sign_in
        Icon::User => "\u{f007}",         // nf-fa-user
        Icon::Menu => "\u{f0c9}",         // nf-fa-bars
    }
}

fn unicode_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "⌂",
        Icon::Utensils => "✻",
        Icon::Calendar => "▦",
        Icon::ShoppingCart => "◍",
        Icon::Briefcase => "▣",
        Icon::ChefHat => "◓",
        Icon::Settings => "⚙",
        Icon::LogOut => "⏻",
        Icon::LogIn => "→",
        Icon::User => "◉",
        Icon::Menu => "≡",
    }
}
