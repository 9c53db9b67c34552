//! Filter set and the stable filter pass.

use std::collections::btree_map::{self, BTreeMap};

use crate::record::Record;

/// Active filters keyed by slot. A missing key means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet<K: Ord, V> {
    active: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for FilterSet<K, V> {
    fn default() -> Self {
        Self {
            active: BTreeMap::new(),
        }
    }
}

impl<K: Ord, V> FilterSet<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`, returning the previous one.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.active.insert(key, value)
    }

    /// Removes the constraint on `key`.
    pub fn clear(&mut self, key: &K) -> Option<V> {
        self.active.remove(key)
    }

    /// `Some` sets, `None` clears.
    pub fn apply(&mut self, key: K, value: Option<V>) {
        match value {
            Some(value) => {
                self.active.insert(key, value);
            }
            None => {
                self.active.remove(&key);
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.active.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.active.iter()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for FilterSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

/// Returns the records that satisfy every active filter, in their original order.
pub fn apply_filters<'a, T: Record>(
    records: &'a [T],
    filters: &FilterSet<T::FilterKey, T::FilterValue>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_all(*record, filters))
        .collect()
}

/// Indices of matching records. Used by the engine to avoid cloning records.
pub(crate) fn matching_indices<T: Record>(
    records: &[T],
    filters: &FilterSet<T::FilterKey, T::FilterValue>,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(*record, filters))
        .map(|(index, _)| index)
        .collect()
}

fn matches_all<T: Record>(record: &T, filters: &FilterSet<T::FilterKey, T::FilterValue>) -> bool {
    filters.iter().all(|(key, value)| record.matches(key, value))
}
