//! Map crossterm key events to shell input events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::InputEvent;

/// Translate one key press. Releases, repeats of modifier-only keys and
/// unbound combinations yield `None`.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(InputEvent::ClearLine),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Some(InputEvent::ToggleTheme),
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => None,
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::ALT) => None,
        (KeyCode::Char(ch), _) => Some(InputEvent::Char(ch)),
        (KeyCode::Esc, _) => Some(InputEvent::Quit),
        (KeyCode::Enter, _) => Some(InputEvent::Submit),
        (KeyCode::Backspace, _) => Some(InputEvent::Backspace),
        (KeyCode::Left, _) => Some(InputEvent::CursorLeft),
        (KeyCode::Right, _) => Some(InputEvent::CursorRight),
        (KeyCode::Up, _) => Some(InputEvent::HistoryOlder),
        (KeyCode::Down, _) => Some(InputEvent::HistoryNewer),
        (KeyCode::Tab, _) => Some(InputEvent::Complete),
        _ => None,
    }
}
