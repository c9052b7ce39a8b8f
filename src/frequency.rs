use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

/// A normalized string and how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// What happened to a string handed to [`FrequencyTable::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The string was already present; its count went up by one.
    Counted,
    /// The string was new and got an entry with count 1.
    Added,
    /// The string was new but the table is at capacity.
    Dropped,
}

/// Insertion-ordered occurrence counter.
///
/// Entries keep first-seen order until [`sort`](Self::sort) is called. At most
/// one entry exists per distinct string; equality is exact.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<String, usize>,
    capacity: Option<usize>,
    dropped: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table that accepts at most `limit` distinct strings.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            capacity: Some(limit),
            ..Self::default()
        }
    }

    pub fn insert(&mut self, value: &str) -> Insertion {
        if let Some(&position) = self.index.get(value) {
            self.entries[position].count += 1;
            return Insertion::Counted;
        }

        if self.is_full() {
            self.dropped += 1;
            return Insertion::Dropped;
        }

        self.index.insert(value.to_string(), self.entries.len());
        self.entries.push(FrequencyEntry {
            value: value.to_string(),
            count: 1,
        });
        Insertion::Added
    }

    /// Orders entries by descending count. Ties keep their current relative order.
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|entry| Reverse(entry.count));
        for (position, entry) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(&entry.value) {
                *slot = position;
            }
        }
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.index
            .get(value)
            .map(|&position| self.entries[position].count)
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|limit| self.entries.len() >= limit)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Occurrences rejected because the table was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
