mod append;
mod grouped;
mod ordered_map;

pub use append::Appended;
pub use grouped::{Grouped, Overridden};
pub use ordered_map::OrderedMap;

use crate::compat::{String, Vec};
use crate::percent_encode::{encode_key, encode_pair_into};
use crate::separator::Separator;

/// Decoded key or value. Kept as bytes so existing escapes that are not
/// UTF-8 round-trip unchanged.
pub type Bytes = Vec<u8>;

/// One occurrence of a key: `None` is a bare key (`?flag`)
pub type Occurrence = Option<Bytes>;

/// Working set of query entries for one merge call.
///
/// Each merge policy is one implementation. The same `update` folds both the
/// parsed original query and the caller's parameters.
pub trait QueryCollection: Default {
    /// Fold the occurrences supplied for one key.
    /// A scalar or bare key is a single occurrence, a sequence is several.
    fn update(&mut self, key: Bytes, occurrences: Vec<Occurrence>);

    /// Number of keys (grouped policies) or entries (append) recorded so far
    fn entry_count(&self) -> usize;

    /// Serialize every recorded occurrence in order
    fn write_query(&self, writer: &mut QueryWriter);

    fn to_query(&self, separator: Separator) -> String {
        let mut writer = QueryWriter::new(separator);
        self.write_query(&mut writer);
        writer.finish()
    }
}

/// Serializes encoded tokens joined by a single separator
#[derive(Debug)]
pub struct QueryWriter {
    buffer: String,
    separator: Separator,
    tokens: usize,
}

impl QueryWriter {
    pub fn new(separator: Separator) -> Self {
        Self {
            buffer: String::new(),
            separator,
            tokens: 0,
        }
    }

    /// Write `key` alone for `None`, `key=value` otherwise
    pub fn push(&mut self, key: &[u8], value: Option<&[u8]>) {
        if self.tokens > 0 {
            self.buffer.push(self.separator.as_char());
        }
        match value {
            None => self.buffer.push_str(&encode_key(key)),
            Some(value) => encode_pair_into(&mut self.buffer, key, value),
        }
        self.tokens += 1;
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Keep the first occurrence of each distinct value.
/// Bare occurrences (`None`) are dropped once the key has any real value; a
/// group made only of bare occurrences collapses to a single one.
pub fn unique_values(values: Vec<Occurrence>) -> Vec<Occurrence> {
    let had_bare = values.iter().any(Option::is_none);
    let mut unique: Vec<Occurrence> = Vec::with_capacity(values.len());

    for value in values.into_iter().flatten() {
        if !unique.iter().any(|seen| seen.as_deref() == Some(value.as_slice())) {
            unique.push(Some(value));
        }
    }

    if unique.is_empty() && had_bare {
        unique.push(None);
    }
    unique
}
