//! Submitted-command history with an up/down recall cursor.

/// Append-only command history.
///
/// The cursor is an offset from the newest entry (`Some(0)` is the most
/// recent submission); `None` means the user is typing freely.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission and return to free typing.
    pub fn record(&mut self, input: &str) {
        self.entries.push(input.to_string());
        self.cursor = None;
    }

    /// Step one entry into the past, stopping at the oldest.
    ///
    /// Returns `None` only when there is no history at all.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let oldest = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(offset) => (offset + 1).min(oldest),
        };
        self.cursor = Some(next);
        self.entry_at(next)
    }

    /// Step one entry toward the present. Stepping past the newest entry
    /// returns to free typing and yields an empty line.
    pub fn recall_newer(&mut self) -> Option<&str> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some("")
            },
            Some(offset) => {
                self.cursor = Some(offset - 1);
                self.entry_at(offset - 1)
            },
        }
    }

    /// Forget the browsing position (fresh edit).
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries in submission order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_at(&self, offset: usize) -> Option<&str> {
        let idx = self.entries.len().checked_sub(offset + 1)?;
        self.entries.get(idx).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> History {
        let mut h = History::new();
        h.record("a");
        h.record("b");
        h.record("c");
        h
    }

    #[test]
    fn older_is_newest_first_and_clamps() {
        let mut h = abc();
        assert_eq!(h.recall_older(), Some("c"));
        assert_eq!(h.recall_older(), Some("b"));
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.cursor(), Some(2));
    }

    #[test]
    fn newer_walks_back_to_free_typing() {
        let mut h = abc();
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), Some("c"));
        assert_eq!(h.recall_newer(), Some(""));
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_newer(), None);
    }

    #[test]
    fn empty_history_recalls_nothing() {
        let mut h = History::new();
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), None);
        assert_eq!(h.cursor(), None);
    }

    #[test]
    fn record_resets_cursor() {
        let mut h = abc();
        h.recall_older();
        h.record("d");
        assert_eq!(h.cursor(), None);
        assert_eq!(h.recall_older(), Some("d"));
    }

    #[test]
    fn recall_does_not_mutate_entries() {
        let mut h = abc();
        for _ in 0..5 {
            h.recall_older();
        }
        h.recall_newer();
        assert_eq!(h.entries(), &["a", "b", "c"]);
    }

    #[test]
    fn reset_cursor_returns_to_free_typing() {
        let mut h = abc();
        h.recall_older();
        h.reset_cursor();
        assert_eq!(h.recall_older(), Some("c"));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut h = History::new();
        h.record("help");
        h.record("help");
        assert_eq!(h.len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn older_n_times_yields_reverse_order(entries in proptest::collection::vec("[a-z]{1,6}", 1..12)) {
                let mut h = History::new();
                for e in &entries {
                    h.record(e);
                }
                for expected in entries.iter().rev() {
                    prop_assert_eq!(h.recall_older(), Some(expected.as_str()));
                }
                // Clamped at the oldest.
                prop_assert_eq!(h.recall_older(), Some(entries[0].as_str()));
            }

            #[test]
            fn newer_undoes_older(entries in proptest::collection::vec("[a-z]{1,6}", 1..12), steps in 1usize..12) {
                let mut h = History::new();
                for e in &entries {
                    h.record(e);
                }
                let steps = steps.min(entries.len());
                for _ in 0..steps {
                    h.recall_older();
                }
                for _ in 0..steps - 1 {
                    h.recall_newer();
                }
                prop_assert_eq!(h.cursor(), Some(0));
                prop_assert_eq!(h.recall_newer(), Some(""));
                prop_assert_eq!(h.len(), entries.len());
            }
        }
    }
}
