//! Key handling for the play screen.
//!
//! Translates raw terminal key events into the abstract [`GameEvent`]s the
//! session understands. Anything unmapped is dropped here.

use crate::game::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Controls shown on the loss screen.
pub const LOST_HINTS: &[(&str, &str)] = &[("[C]", "Play again"), ("[Esc]", "Quit")];

/// Controls shown in the status bar while playing.
pub const PLAY_HINTS: &[(&str, &str)] = &[
    ("[Space/Up]", "Flap"),
    ("[P]", "Pause"),
    ("[Q]", "Quit"),
];

pub fn map_key(key: KeyEvent) -> Option<GameEvent> {
    // Terminals that report releases would otherwise double every flap
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameEvent::QuitRequested),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(GameEvent::Jump),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameEvent::Pause),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameEvent::Restart),
        KeyCode::Esc => Some(GameEvent::QuitToDesktop),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::QuitRequested),
        _ => None,
    }
}

/// Map every key in a frame's worth of input, keeping arrival order.
pub fn map_keys(keys: impl IntoIterator<Item = KeyEvent>) -> Vec<GameEvent> {
    keys.into_iter().filter_map(map_key).collect()
}
