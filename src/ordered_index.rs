//! Sorted associative index keyed by a floating-point position.
//!
//! Keys pair the position with an insertion sequence number, so entries that
//! share a position stay distinct and the most recently inserted one sorts
//! last among them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Position of an entry in an [`OrderedIndex`].
#[derive(Debug, Clone, Copy)]
pub struct IndexKey {
    x: f64,
    seq: u64,
}

impl IndexKey {
    /// The numeric position this key sorts by.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Insertion sequence number, used as the tie-break.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Same entry, moved to a new position.
    #[must_use]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, seq: self.seq }
    }

    /// Smallest key at position `x`.
    fn floor(x: f64) -> Self {
        Self { x, seq: 0 }
    }
}

impl PartialEq for IndexKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexKey {}

impl PartialOrd for IndexKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A balanced ordered index: insert, remove, in-order listing and bulk
/// rebuild from an already sorted sequence.
#[derive(Debug, Clone)]
pub struct OrderedIndex<T> {
    entries: BTreeMap<IndexKey, T>,
    next_seq: u64,
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 1,
        }
    }
}

impl<T> OrderedIndex<T> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `payload` at position `x` and returns its key.
    pub fn insert(&mut self, x: f64, payload: T) -> IndexKey {
        let key = IndexKey {
            x,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(key, payload);
        key
    }

    /// Removes the entry stored under `key`.
    pub fn remove(&mut self, key: &IndexKey) -> Option<T> {
        self.entries.remove(key)
    }

    /// Mutable access to the payload stored under `key`.
    pub fn get_mut(&mut self, key: &IndexKey) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&IndexKey, &T)> {
        self.entries.iter()
    }

    /// Entries in ascending key order.
    #[must_use]
    pub fn in_order(&self) -> Vec<(IndexKey, &T)> {
        self.entries.iter().map(|(k, v)| (*k, v)).collect()
    }

    /// The entry with the largest position strictly less than `x`.
    ///
    /// Among entries sharing that position, the most recently inserted wins.
    #[must_use]
    pub fn last_before(&self, x: f64) -> Option<(IndexKey, &T)> {
        self.entries
            .range(..IndexKey::floor(x))
            .next_back()
            .map(|(k, v)| (*k, v))
    }

    /// Replaces the contents with `sorted`, which must already be in
    /// ascending key order.
    pub fn rebuild_from_sorted<I>(&mut self, sorted: I)
    where
        I: IntoIterator<Item = (IndexKey, T)>,
    {
        let entries: Vec<(IndexKey, T)> = sorted.into_iter().collect();
        debug_assert!(entries.windows(2).all(|w| w[0].0 <= w[1].0));
        if let Some(max_seq) = entries.iter().map(|(k, _)| k.seq).max() {
            self.next_seq = self.next_seq.max(max_seq + 1);
        }
        self.entries = entries.into_iter().collect();
    }

    /// Recomputes every position with `position` and rebuilds the index.
    ///
    /// Sequence numbers survive, so ties keep resolving to the most recent
    /// insertion.
    pub fn rekey<F: FnMut(&T) -> f64>(&mut self, mut position: F) {
        let mut rekeyed: Vec<(IndexKey, T)> = std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(k, v)| (k.with_x(position(&v)), v))
            .collect();
        rekeyed.sort_by(|a, b| a.0.cmp(&b.0));
        self.rebuild_from_sorted(rekeyed);
    }
}
