use super::{Bytes, Occurrence, OrderedMap, QueryCollection, QueryWriter, unique_values};
use crate::compat::Vec;

fn write_map(map: &OrderedMap, writer: &mut QueryWriter) {
    for (key, values) in map.iter() {
        for value in values {
            writer.push(key, value.as_deref());
        }
    }
}

/// Groups entries under the key's first position and keeps distinct values.
///
/// `a` followed by `a=b` collapses to `a=b`: once a key has a value its bare
/// occurrences count as duplicates.
#[derive(Debug, Clone, Default)]
pub struct Grouped {
    map: OrderedMap,
}

impl QueryCollection for Grouped {
    fn update(&mut self, key: Bytes, occurrences: Vec<Occurrence>) {
        match self.map.get_mut(&key) {
            Some(existing) => {
                if *existing == occurrences {
                    return;
                }
                let mut merged = core::mem::take(existing);
                merged.extend(occurrences);
                *existing = unique_values(merged);
            }
            None => self.map.insert(key, unique_values(occurrences)),
        }
    }

    fn entry_count(&self) -> usize {
        self.map.len()
    }

    fn write_query(&self, writer: &mut QueryWriter) {
        write_map(&self.map, writer);
    }
}

/// Last write wins without moving the key.
///
/// A sequence replaces the key's values wholesale with its distinct members.
#[derive(Debug, Clone, Default)]
pub struct Overridden {
    map: OrderedMap,
}

impl QueryCollection for Overridden {
    fn update(&mut self, key: Bytes, occurrences: Vec<Occurrence>) {
        self.map.insert(key, unique_values(occurrences));
    }

    fn entry_count(&self) -> usize {
        self.map.len()
    }

    fn write_query(&self, writer: &mut QueryWriter) {
        write_map(&self.map, writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::fold;
    use crate::value::ParamValue;

    #[test]
    fn test_grouped_drops_true_duplicate() {
        let query = fold::<Grouped>(&[("a", "b".into()), ("a", "b".into())]);
        assert_eq!(query, "a=b");
    }

    #[test]
    fn test_grouped_groups_at_first_position() {
        let query = fold::<Grouped>(&[
            ("a", "b".into()),
            ("b", "c".into()),
            ("a", "b".into()),
            ("a", "d".into()),
            ("a", "b".into()),
        ]);
        assert_eq!(query, "a=b&a=d&b=c");
    }

    #[test]
    fn test_grouped_merges_sequence() {
        let query = fold::<Grouped>(&[("a", "b".into()), ("a", ["q", "b", "c"].into())]);
        assert_eq!(query, "a=b&a=q&a=c");
    }

    #[test]
    fn test_grouped_value_replaces_bare_key() {
        let query = fold::<Grouped>(&[("a", ParamValue::Absent), ("a", "b".into())]);
        assert_eq!(query, "a=b");

        let query = fold::<Grouped>(&[("a", "b".into()), ("a", ParamValue::Absent)]);
        assert_eq!(query, "a=b");
    }

    #[test]
    fn test_grouped_keeps_lone_bare_key() {
        let query = fold::<Grouped>(&[("a", ParamValue::Absent), ("a", ParamValue::Absent)]);
        assert_eq!(query, "a");
    }

    #[test]
    fn test_overridden_last_write_wins_in_place() {
        let query = fold::<Overridden>(&[
            ("a", "b".into()),
            ("x", "1".into()),
            ("a", "c".into()),
        ]);
        assert_eq!(query, "a=c&x=1");
    }

    #[test]
    fn test_overridden_bare_and_value_replace_each_other() {
        let query = fold::<Overridden>(&[("a", ParamValue::Absent), ("a", "b".into())]);
        assert_eq!(query, "a=b");

        let query = fold::<Overridden>(&[("a", "b".into()), ("a", ParamValue::Absent)]);
        assert_eq!(query, "a");
    }

    #[test]
    fn test_overridden_sequence_is_deduplicated() {
        let query = fold::<Overridden>(&[("a", "z".into()), ("a", ["q", "b", "q"].into())]);
        assert_eq!(query, "a=q&a=b");
    }

    #[test]
    fn test_overridden_empty_sequence_keeps_no_tokens() {
        let query = fold::<Overridden>(&[("a", "z".into()), ("a", Vec::<&str>::new().into())]);
        assert_eq!(query, "");
    }

    #[test]
    fn test_overridden_is_idempotent() {
        let once = fold::<Overridden>(&[("a", "b".into()), ("k", "v".into())]);
        let twice = fold::<Overridden>(&[
            ("a", "b".into()),
            ("k", "v".into()),
            ("k", "v".into()),
        ]);
        assert_eq!(once, twice);
    }
}
