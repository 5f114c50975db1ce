//! An immutable, shareable record collection.
//!
//! `Dataset<T>` is the in-process stand-in for a distributed collection: an
//! Arc-backed vector with the handful of relational operations the
//! vectorization layer needs. Cloning a dataset clones the handle, not the
//! records.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// An immutable collection of records behind a cheap, cloneable handle.
#[derive(Debug)]
pub struct Dataset<T> {
    records: Arc<Vec<T>>,
}

impl<T> Clone for Dataset<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(records: Vec<T>) -> Self {
        Self::from_records(records)
    }
}

impl<T> Dataset<T> {
    /// Wrap a vector of records.
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate the records lazily.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Count records per key.
    ///
    /// Keys appear in first-encounter order, so repeated runs over the same
    /// input produce the same ordering. Callers that stable-sort the result
    /// get deterministic tie-breaks for free.
    pub fn group_count<K, F>(&self, key: F) -> Vec<(K, u64)>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut counts: Vec<(K, u64)> = Vec::new();

        for record in self.records.iter() {
            let k = key(record);
            match slots.get(&k) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(k.clone(), counts.len());
                    counts.push((k, 1));
                }
            }
        }

        counts
    }

    /// Group extracted values per key.
    pub fn group_by<K, V, F>(&self, pair: F) -> HashMap<K, Vec<V>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> (K, V),
    {
        let mut groups: HashMap<K, Vec<V>> = HashMap::new();

        for record in self.records.iter() {
            let (k, v) = pair(record);
            groups.entry(k).or_default().push(v);
        }

        groups
    }
}
