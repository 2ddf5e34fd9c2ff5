//! Key bindings: arrow keys steer, q / Esc / Ctrl-C quit.

use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    Quit,
    None,
}

/// Map key event to game action. Anything unrecognised is ignored.
pub fn key_to_action(key: KeyEvent) -> Action {
    let KeyEvent { code, modifiers, .. } = key;
    if modifiers == KeyModifiers::CONTROL {
        return match code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }
    if !modifiers.is_empty() {
        return Action::None;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up => Action::Turn(Direction::Up),
        KeyCode::Down => Action::Turn(Direction::Down),
        KeyCode::Left => Action::Turn(Direction::Left),
        KeyCode::Right => Action::Turn(Direction::Right),
        _ => Action::None,
    }
}
