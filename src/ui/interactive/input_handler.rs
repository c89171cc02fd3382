//! Keyboard input mapping for the interactive UI.

use super::navigation_manager::NavEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the UI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Navigate(NavEvent),
    /// Open the page-number prompt
    PromptPage,
    Ignore,
}

/// Maps a key event to an input action.
///
/// Only key presses count; release and repeat events are ignored.
pub fn map_key_event(key_event: &KeyEvent) -> InputAction {
    if key_event.kind != KeyEventKind::Press {
        return InputAction::Ignore;
    }

    let action = match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Navigate(NavEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Navigate(NavEvent::Quit),
        KeyCode::Char('n') | KeyCode::Right => InputAction::Navigate(NavEvent::Advance),
        KeyCode::Char('p') | KeyCode::Left => InputAction::Navigate(NavEvent::Retreat),
        KeyCode::Char('r') => InputAction::Navigate(NavEvent::Reload),
        KeyCode::Char(' ') | KeyCode::Enter => InputAction::PromptPage,
        _ => InputAction::Ignore,
    };

    if action != InputAction::Ignore {
        tracing::debug!("Key {:?} mapped to {:?}", key_event.code, action);
    }
    action
}
