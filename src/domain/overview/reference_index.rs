//! In-memory id -> record lookup used to decorate joined views.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Label for a club that a stored reference points to but no longer exists.
pub const UNKNOWN_CLUB: &str = "Unknown Club";

/// Label for any other missing referenced field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Records keyed by id, built from one batched fetch.
#[derive(Debug, Clone)]
pub struct ReferenceIndex<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> ReferenceIndex<K, V>
where
    K: Eq + Hash,
{
    pub fn build(records: impl IntoIterator<Item = V>, key: impl Fn(&V) -> K) -> Self {
        let entries = records.into_iter().map(|v| (key(&v), v)).collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Text taken from the referenced record, or `fallback` when dangling.
    pub fn label<'a>(&'a self, key: &K, field: impl FnOnce(&'a V) -> &'a str, fallback: &'a str) -> String {
        self.entries
            .get(key)
            .map(field)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Order-preserving de-duplication of referenced ids, ready for a single
/// `id = ANY(...)` fetch.
pub fn distinct<K>(ids: impl IntoIterator<Item = K>) -> Vec<K>
where
    K: Eq + Hash + Copy,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
        name: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                name: "one".into(),
            },
            Row {
                id: 2,
                name: "two".into(),
            },
        ]
    }

    #[test]
    fn label_uses_record_when_present_and_fallback_when_dangling() {
        let index = ReferenceIndex::build(rows(), |r| r.id);
        assert_eq!(index.len(), 2);
        assert_eq!(index.label(&2, |r| r.name.as_str(), UNKNOWN_CLUB), "two");
        assert_eq!(index.label(&9, |r| r.name.as_str(), UNKNOWN_CLUB), "Unknown Club");
        assert!(index.get(&9).is_none());
    }

    #[test]
    fn empty_index_always_falls_back() {
        let index: ReferenceIndex<u32, Row> = ReferenceIndex::empty();
        assert!(index.is_empty());
        assert_eq!(index.label(&1, |r| r.name.as_str(), NOT_AVAILABLE), "N/A");
    }

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        assert_eq!(distinct([3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(distinct(Vec::<u32>::new()).is_empty());
    }
}
