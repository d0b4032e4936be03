//! mealprep-tui - Terminal UI for the MealPrepper dashboard
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from mealprep-app and adds terminal rendering, event polling
//! (keyboard, mouse, resize) and the dashboard widgets.

pub mod event;
pub mod hit_map;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
