//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game commands.
///
/// Arrow keys and A/D/S move, Q/E rotate counter-clockwise/clockwise.
/// Up and W also rotate clockwise.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::RotateCcw),
        KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::RotateCw),

        _ => None,
    }
}

/// Press and auto-repeat both count; releases are ignored.
pub fn accepts_kind(kind: KeyEventKind) -> bool {
    matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the game (Esc or Ctrl+C; `q` is a rotate key).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
