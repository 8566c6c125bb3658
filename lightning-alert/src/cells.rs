//! Deduplicated set of quadkeys touched by lightning events.

use std::collections::hash_set;
use std::collections::HashSet;

use crate::coord::Quadkey;

/// Set of distinct quadkeys accumulated over an event stream.
///
/// Inserting a quadkey that is already present is a no-op. Membership can be
/// probed with a `&str` so stored asset keys are checked without allocating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Quadkey>,
}

impl CellSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quadkey. Returns `true` if it was not already present.
    pub fn insert(&mut self, quadkey: Quadkey) -> bool {
        self.cells.insert(quadkey)
    }

    /// Returns true if `quadkey` was touched by at least one event.
    pub fn contains(&self, quadkey: &str) -> bool {
        self.cells.contains(quadkey)
    }

    /// Number of distinct quadkeys.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the quadkeys in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Quadkey> {
        self.cells.iter()
    }
}

impl FromIterator<Quadkey> for CellSet {
    fn from_iter<I: IntoIterator<Item = Quadkey>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Quadkey;
    type IntoIter = hash_set::Iter<'a, Quadkey>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
