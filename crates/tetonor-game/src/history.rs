use std::{collections::VecDeque, mem, num::NonZero};

/// A linear undo/redo stack of snapshots.
///
/// Entries before the cursor hold the state from before each applied action.
/// Entries from the cursor on hold the states that undo displaced, ready for
/// redo. Undo and redo swap the live state with one entry, so a round trip
/// restores exactly what was there.
///
/// Pushing a new snapshot discards the redo branch. A capped stack drops its
/// oldest undo step when full; an uncapped one grows without bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    stack: VecDeque<T>,
    capacity: Option<NonZero<usize>>,
    cursor: usize,
}

impl<T> History<T> {
    /// Creates an empty history holding at most `capacity` snapshots, or any
    /// number of them when `capacity` is `None`.
    #[must_use]
    pub fn new(capacity: Option<NonZero<usize>>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    /// Number of stored snapshots (undo and redo).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Index of the snapshot the next undo restores, `None` if there is none.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Records `snapshot`, the state from before an action, and drops the redo branch.
    pub fn push(&mut self, snapshot: T) {
        self.stack.truncate(self.cursor);

        if self.capacity.is_some_and(|cap| self.stack.len() == cap.get()) {
            self.stack.pop_front();
            self.cursor -= 1;
        }

        self.stack.push_back(snapshot);
        self.cursor = self.stack.len();
    }

    /// Returns `true` if an applied action can be undone.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Restores the previous state into `current`.
    ///
    /// Returns `false`, leaving `current` untouched, if there is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        mem::swap(current, &mut self.stack[self.cursor]);
        true
    }

    /// Returns `true` if an undone action can be redone.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.stack.len()
    }

    /// Re-applies the most recently undone state into `current`.
    ///
    /// Returns `false`, leaving `current` untouched, if there is nothing to redo.
    pub fn redo(&mut self, current: &mut T) -> bool {
        if !self.can_redo() {
            return false;
        }
        mem::swap(current, &mut self.stack[self.cursor]);
        self.cursor += 1;
        true
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.cursor = 0;
    }
}
