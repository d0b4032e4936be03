//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mealprep_app::{AppState, InputKey, Message};
use mealprep_core::prelude::*;
use ratatui::layout::Rect;
use std::time::Duration;

use crate::hit_map;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event to a message; only left clicks and the wheel act
pub fn mouse_event_to_message(mouse: MouseEvent, state: &AppState) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (width, height) = state.terminal_size;
            hit_map::message_for_click(
                state,
                Rect::new(0, 0, width, height),
                mouse.column,
                mouse.row,
            )
        }
        MouseEventKind::ScrollUp => Some(Message::SelectPrevious),
        MouseEventKind::ScrollDown => Some(Message::SelectNext),
        _ => None,
    }
}

/// Convert any terminal event to a message
pub fn translate(event: Event, state: &AppState) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, state),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(state: &AppState) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(translate(event::read()?, state))
    } else {
        Ok(Some(Message::Tick))
    }
}
