//! Platform-agnostic input event types.
//!
//! The host maps its native key events to these. The shell core never sees
//! raw terminal input.

/// A line-editing event delivered to the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed.
    Char(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Submit the current line (Enter).
    Submit,
    /// Recall an older history entry (Up).
    HistoryOlder,
    /// Recall a newer history entry (Down).
    HistoryNewer,
    /// Complete the current word (Tab).
    Complete,
    /// Discard the current line (Ctrl+C). Does not cancel running commands.
    ClearLine,
    /// Flip the color theme from outside the command vocabulary.
    ToggleTheme,
    /// Leave the shell.
    Quit,
}

impl InputEvent {
    /// Events that rewrite the buffer text. Each one ends history browsing.
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Self::Char(_) | Self::Backspace | Self::ClearLine | Self::Complete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits() {
        assert!(InputEvent::Char('a').is_edit());
        assert!(InputEvent::Backspace.is_edit());
        assert!(InputEvent::ClearLine.is_edit());
        assert!(InputEvent::Complete.is_edit());
    }

    #[test]
    fn navigation_is_not_edit() {
        assert!(!InputEvent::HistoryOlder.is_edit());
        assert!(!InputEvent::HistoryNewer.is_edit());
        assert!(!InputEvent::Submit.is_edit());
        assert!(!InputEvent::CursorLeft.is_edit());
    }

    #[test]
    fn char_event_equality() {
        assert_eq!(InputEvent::Char('x'), InputEvent::Char('x'));
        assert_ne!(InputEvent::Char('x'), InputEvent::Char('y'));
    }
}
