use super::{Bytes, Occurrence, QueryCollection, QueryWriter};
use crate::compat::Vec;

/// Flat sequence of entries. Nothing is grouped or dropped.
#[derive(Debug, Clone, Default)]
pub struct Appended {
    entries: Vec<(Bytes, Occurrence)>,
}

impl QueryCollection for Appended {
    fn update(&mut self, key: Bytes, occurrences: Vec<Occurrence>) {
        self.entries.reserve(occurrences.len());
        for value in occurrences {
            self.entries.push((key.clone(), value));
        }
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn write_query(&self, writer: &mut QueryWriter) {
        for (key, value) in &self.entries {
            writer.push(key, value.as_deref());
        }
    }
}
