// src/models/frequency_table.rs
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Occurrence counts keyed by case-folded word.
///
/// Every key present has a count of at least one. Keys are kept in
/// code-point order so iteration is deterministic, but that order is not the
/// reporting order; see [`crate::core::collate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Records one occurrence of `word`, inserting it with a count of one if
    /// it has not been seen before.
    #[inline]
    pub fn record(&mut self, word: String) {
        let count = self.counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Adds every count of `other` into this table.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        for (word, count) in other.counts {
            let entry = self.counts.entry(word).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were recorded.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count))
    }

    #[inline]
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<W: Into<String>> FromIterator<(W, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (W, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            if count == 0 {
                continue;
            }
            let entry = table.counts.entry(word.into()).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        table
    }
}
