//! Bounded most-recent-first record of additions, used for undo.

use std::collections::VecDeque;

use super::errors::{DomainError, DomainResult};
use super::models::Denomination;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Capped LIFO of added denominations.
///
/// The front is the most recent entry. Pushing past the limit evicts the
/// oldest entry from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: VecDeque<Denomination>,
    limit: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_HISTORY_LIMIT),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl HistoryStack {
    /// Creates an empty stack holding at most `limit` entries.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroHistoryLimit`] when `limit` is zero.
    pub fn with_limit(limit: usize) -> DomainResult<Self> {
        if limit == 0 {
            return Err(DomainError::ZeroHistoryLimit);
        }
        Ok(Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        })
    }

    /// Records a new entry, returning the evicted one if the stack was full.
    pub fn push(&mut self, denomination: Denomination) -> Option<Denomination> {
        self.entries.push_front(denomination);
        if self.entries.len() > self.limit {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<Denomination> {
        self.entries.pop_front()
    }

    pub fn peek(&self) -> Option<Denomination> {
        self.entries.front().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.entries.iter().copied()
    }
}
