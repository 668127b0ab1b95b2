use super::{Bytes, Occurrence};
use crate::compat::{BTreeMap, Vec};

/// Insertion-ordered map from key to the values recorded for it.
///
/// Entries live in a `Vec` so iteration follows first insertion; the
/// `BTreeMap` only maps a key to its slot. A key never moves once inserted.
#[derive(Debug, Clone, Default)]
pub struct OrderedMap {
    entries: Vec<(Bytes, Vec<Occurrence>)>,
    index: BTreeMap<Bytes, usize>,
}

impl OrderedMap {
    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut Vec<Occurrence>> {
        let slot = *self.index.get(key)?;
        Some(&mut self.entries[slot].1)
    }

    /// Insert or replace the values of `key`, keeping its original position
    pub fn insert(&mut self, key: Bytes, values: Vec<Occurrence>) {
        if let Some(existing) = self.get_mut(&key) {
            *existing = values;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, values));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[Occurrence])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_slice(), values.as_slice()))
    }
}
