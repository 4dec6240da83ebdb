use std::collections::HashMap;
use std::fmt;

use super::errors::{DomainError, DomainResult};

/// Registry used when no configuration overrides it.
pub const DEFAULT_DENOMINATIONS: [u32; 5] = [100, 50, 10, 5, 2];

/// A single denomination value drawn from a [`DenominationSet`].
///
/// The field is private: the only way to obtain one is to look it up in a
/// registry, so callers cannot invent values outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Denomination(u32);

impl Denomination {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, immutable registry of the denominations that can be tallied.
///
/// # Examples
///
/// ```
/// use angpao::domain::DenominationSet;
///
/// let set = DenominationSet::new(vec![100, 50, 10]).unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.get(1).map(|d| d.value()), Some(50));
/// assert!(set.lookup(7).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    values: Vec<Denomination>,
}

impl Default for DenominationSet {
    fn default() -> Self {
        Self {
            values: DEFAULT_DENOMINATIONS.iter().copied().map(Denomination).collect(),
        }
    }
}

impl DenominationSet {
    /// Builds a registry, keeping the given order.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, contains a zero, or repeats a value.
    pub fn new(values: Vec<u32>) -> DomainResult<Self> {
        if values.is_empty() {
            return Err(DomainError::EmptyDenominations);
        }

        let mut seen = Vec::with_capacity(values.len());
        for value in values {
            if value == 0 {
                return Err(DomainError::ZeroDenomination);
            }
            if seen.contains(&Denomination(value)) {
                return Err(DomainError::DuplicateDenomination(value));
            }
            seen.push(Denomination(value));
        }

        Ok(Self { values: seen })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.values.iter().copied()
    }

    /// Denomination at a display position.
    pub fn get(&self, index: usize) -> Option<Denomination> {
        self.values.get(index).copied()
    }

    /// Finds the registry member with the given face value.
    pub fn lookup(&self, value: u32) -> Option<Denomination> {
        self.values.iter().copied().find(|d| d.0 == value)
    }

    pub fn index_of(&self, denomination: Denomination) -> Option<usize> {
        self.values.iter().position(|d| *d == denomination)
    }

    pub fn contains(&self, denomination: Denomination) -> bool {
        self.values.contains(&denomination)
    }
}

/// Per-denomination counts. Holds exactly one entry per registry member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyState {
    counts: HashMap<Denomination, u64>,
}

impl TallyState {
    pub fn new(denominations: &DenominationSet) -> Self {
        Self {
            counts: denominations.iter().map(|d| (d, 0)).collect(),
        }
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    pub fn contains(&self, denomination: Denomination) -> bool {
        self.counts.contains_key(&denomination)
    }

    /// Increments a tracked denomination. Returns `false` for unknown keys.
    pub fn increment(&mut self, denomination: Denomination) -> bool {
        match self.counts.get_mut(&denomination) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Decrements a tracked denomination, never going below zero.
    ///
    /// Returns `false` when the count was already zero or the key is unknown.
    pub fn decrement(&mut self, denomination: Denomination) -> bool {
        match self.counts.get_mut(&denomination) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
