//! Most-recently-used ordering over windows or workspaces.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// An ordered most-recent-first sequence with no duplicate entries. Used for
/// focus-cycling and "previous" semantics.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    entries: VecDeque<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<T: Copy + PartialEq> History<T> {
    /// Moves the entry to the front, inserting it if it was absent.
    pub fn shift(&mut self, item: T) {
        self.remove(item);
        self.entries.push_front(item);
    }

    /// Returns `true` if the entry was present.
    pub fn remove(&mut self, item: T) -> bool {
        match self.entries.iter().position(|e| *e == item) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<T> {
        self.entries.front().copied()
    }

    /// The second-most-recent entry. This is what "cycle to previous" must
    /// return: it excludes the front entry.
    #[must_use]
    pub fn previous(&self) -> Option<T> {
        self.entries.get(1).copied()
    }

    #[must_use]
    pub fn contains(&self, item: T) -> bool {
        self.entries.contains(&item)
    }

    /// Iterate entries most-recent-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
