//! Git history metrics
//!
//! Provides:
//! - Commit cadence (average gap, commits per week)
//! - Regional benchmark comparison
//! - The JSON metrics report

mod benchmark;
mod cadence;
mod report;

pub use benchmark::*;
pub use cadence::*;
pub use report::*;

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter that remembers first-seen order.
///
/// Ties in [`Tally::most_common`] keep that order, and serialization emits a
/// JSON object with keys in that order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].1 += 1;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
    }

    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    /// The `n` highest counts, descending; equal counts stay in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(K, u64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

impl<K: PartialEq> PartialEq for Tally<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Serialize> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_common_is_stable() {
        let tally: Tally<&str> = ["b", "a", "c", "a", "c", "d"].into_iter().collect();
        assert_eq!(tally.most_common(3), vec![("a", 2), ("c", 2), ("b", 1)]);
        assert_eq!(tally.most_common(10).len(), 4);
    }

    #[test]
    fn test_get_and_len() {
        let tally: Tally<String> = ["x".to_string(), "x".to_string()].into_iter().collect();
        assert_eq!(tally.get("x"), 2);
        assert_eq!(tally.get("y"), 0);
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn test_serializes_in_first_seen_order() {
        let tally: Tally<&str> = ["mixed", "backend", "backend", "frontend"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&tally).unwrap(),
            r#"{"mixed":1,"backend":2,"frontend":1}"#
        );
    }
}
