// SPDX-License-Identifier: MPL-2.0
//! Linear undo/redo history.
//!
//! Always holds at least one entry and the index always points at a valid
//! one. Entries are never modified; pushing after an undo drops the redo tail.

#[derive(Debug, Clone, PartialEq)]
pub struct History<T> {
    entries: Vec<T>,
    index: usize,
}

impl<T> History<T> {
    /// Starts a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// Drops everything after the current entry, appends `entry` and moves
    /// onto it.
    pub fn push(&mut self, entry: T) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }

    /// Steps back one entry.
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Steps forward one entry.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_has_one_entry() {
        let history = History::new("a");
        assert_eq!(history.len(), 1);
        assert_eq!(*history.current(), "a");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn recording_after_undo_discards_redo_stack() {
        let mut history = History::new(0);
        history.push(1);
        history.push(2);
        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), Some(&0));

        history.push(3);
        assert_eq!(history.len(), 2);
        assert_eq!(*history.current(), 3);
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some(&0));
        assert_eq!(history.redo(), Some(&3));
    }

    #[test]
    fn undo_redo_respect_history_bounds() {
        let mut history = History::new('a');
        history.push('b');

        assert_eq!(history.undo(), Some(&'a'));
        assert_eq!(history.undo(), None);
        assert_eq!(history.index(), 0);

        assert_eq!(history.redo(), Some(&'b'));
        assert_eq!(history.redo(), None);
        assert_eq!(history.index(), 1);
    }

    #[test]
    fn replaying_any_walk_matches_stored_entries() {
        let mut history = History::new(10);
        for value in [20, 30, 40] {
            history.push(value);
        }
        let walk = [false, false, true, false, false, false, true, true, true, true];
        for redo in walk {
            let before = history.index();
            let moved = if redo { history.redo().copied() } else { history.undo().copied() };
            let expected = [10, 20, 30, 40][history.index()];
            assert_eq!(*history.current(), expected);
            if let Some(value) = moved {
                assert_eq!(value, expected);
                assert_ne!(history.index(), before);
            } else {
                assert_eq!(history.index(), before);
            }
        }
    }
}
