//! Terminal-independent key events.
//!
//! Keys are converted from crossterm at the TUI boundary so the state machine
//! (and the headless runner) never depend on a terminal library.

/// A key press, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Digit value for `'1'..='9'`, used for sidebar jumps
    pub fn digit(&self) -> Option<usize> {
        match self {
            InputKey::Char(c) => c
                .to_digit(10)
                .filter(|d| *d > 0)
                .map(|d| d as usize),
            _ => None,
        }
    }
}
