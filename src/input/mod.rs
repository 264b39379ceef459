//! Key mapping from terminal events to simulation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::SimAction;

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SimAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(SimAction::TogglePause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SimAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the simulation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
