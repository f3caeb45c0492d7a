//! Keyboard input handling.
//!
//! Translates terminal key events into game inputs so the frame loop in
//! main.rs only has to dispatch.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of translating one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the active mode.
    Game(GameInput),
    /// Leave the program.
    Quit,
    /// Unbound key; ignore it.
    None,
}

/// Map a key event to an action.
///
/// Arrows and WASD steer, `r` restarts, `n` or Enter moves on from a cleared
/// level, `q`, Esc and Ctrl+C quit. Release events are ignored.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Game(GameInput::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Game(GameInput::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            KeyAction::Game(GameInput::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            KeyAction::Game(GameInput::Right)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(GameInput::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
            KeyAction::Game(GameInput::NextLevel)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
