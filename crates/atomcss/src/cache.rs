//! Deduplication store for generated rules.

use std::collections::HashMap;
use std::hash::Hash;

/// Identity of an atomic rule.
///
/// Two leaves with equal signatures compile to the same rule, so they share
/// a class name. Fields are compared individually, which keeps signatures
/// collision-free whatever characters the components contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub media: Option<String>,
    pub selectors: Vec<String>,
    pub property: String,
    pub value: String,
}

/// Maps a cache key to the value minted the first time the key was seen.
#[derive(Debug, Clone)]
pub struct RuleCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for RuleCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> RuleCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, calling `mint` only on a miss.
    pub fn get_or_insert_with(&mut self, key: K, mint: impl FnOnce() -> V) -> V {
        self.entries.entry(key).or_insert_with(mint).clone()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
