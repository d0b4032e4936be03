//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use mealprep_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Start reporting mouse clicks; the dashboard stays usable without them
pub fn enable_mouse() {
    if let Err(e) = execute!(std::io::stdout(), EnableMouseCapture) {
        warn!("Mouse capture unavailable: {}", e);
    }
}

pub fn disable_mouse() {
    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
}
