//! Line-editing state for the input surface.
//!
//! The line editor owns the text being typed. History recall and completion
//! are consulted here, never by the dispatcher.

use folio_types::input::InputEvent;

use crate::effects::SideEffects;
use crate::session::{Session, Submission};

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    None,
    Submitted(Submission),
    Quit,
}

/// Text being edited, with a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole line and put the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        if at < self.text.len() {
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Apply one event against `session`.
    ///
    /// Typing is allowed while the session is busy; only submission is
    /// refused, and a refused line stays in the buffer.
    pub fn handle<E: SideEffects>(
        &mut self,
        event: InputEvent,
        session: &mut Session<E>,
    ) -> LineAction {
        if event.is_edit() {
            session.history_mut().reset_cursor();
        }
        match event {
            InputEvent::Char(ch) => self.insert(ch),
            InputEvent::Backspace => self.backspace(),
            InputEvent::CursorLeft => self.move_left(),
            InputEvent::CursorRight => self.move_right(),
            InputEvent::ClearLine => self.clear(),
            InputEvent::Submit => {
                let outcome = session.submit(&self.text);
                if outcome != Submission::Busy {
                    self.clear();
                }
                return LineAction::Submitted(outcome);
            },
            InputEvent::HistoryOlder => {
                if let Some(entry) = session.history_mut().recall_older() {
                    let entry = entry.to_string();
                    self.set(entry);
                }
            },
            InputEvent::HistoryNewer => {
                if let Some(entry) = session.history_mut().recall_newer() {
                    let entry = entry.to_string();
                    self.set(entry);
                }
            },
            InputEvent::Complete => {
                let completed = session.complete(&self.text);
                self.set(completed);
            },
            InputEvent::ToggleTheme => {
                session.toggle_theme();
            },
            InputEvent::Quit => return LineAction::Quit,
        }
        LineAction::None
    }
}
