// src/core/reply/indexed.rs

use indexmap::IndexMap;
use std::ops::Index;

/// Index query results: each matched document key maps to the values found under it.
///
/// Iteration walks keys in the order the server returned them and yields every value
/// of every key.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedCollection<T> {
    entries: IndexMap<String, Vec<T>>,
}

impl<T> Default for IndexedCollection<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> IndexedCollection<T> {
    pub fn new(entries: IndexMap<String, Vec<T>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys, not values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every value across all keys, flattened.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values().flatten()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<T>> {
        self.entries
    }
}

impl<T> Index<&str> for IndexedCollection<T> {
    type Output = [T];

    fn index(&self, key: &str) -> &Self::Output {
        &self.entries[key]
    }
}

impl<T> IntoIterator for IndexedCollection<T> {
    type Item = T;
    type IntoIter = std::iter::Flatten<indexmap::map::IntoValues<String, Vec<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values().flatten()
    }
}
