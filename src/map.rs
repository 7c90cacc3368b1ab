//! Ordered key/value map for rendering.
//!
//! [`ValueMap`] keeps entries in the order they were inserted, which is the order the
//! renderer enumerates them in. Keys are arbitrary [`Value`]s, so the map is a
//! vector of pairs rather than a hash table: keys such as floats or opaque objects
//! cannot be hashed.
//!
//! Conversions from the standard maps keep whatever order those maps iterate in:
//! insertion order for [`IndexMap`], key order for [`BTreeMap`], and the hash map's own
//! (unspecified) order for [`HashMap`].
//!
//! ## Examples
//!
//! ```rust
//! use readable::{ValueMap, Value};
//!
//! let mut map = ValueMap::new();
//! map.insert(Value::from(0), Value::from("A"));
//! map.insert(Value::from(1), Value::from("B"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(Value::from(map).to_string(), "{0–\"A\", 1–\"B\"}");
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// An insertion-ordered map from values to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap(Vec<(Value, Value)>);

impl ValueMap {
    /// Creates an empty `ValueMap`.
    #[must_use]
    pub fn new() -> Self {
        ValueMap(Vec::new())
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap(Vec::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained an equal key, its value is replaced in place (the
    /// entry keeps its original position) and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use readable::{ValueMap, Value};
    ///
    /// let mut map = ValueMap::new();
    /// assert!(map.insert(Value::from("key"), Value::from(42)).is_none());
    /// assert_eq!(map.insert(Value::from("key"), Value::from(43)), Some(Value::from(42)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}

impl IntoIterator for ValueMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<IndexMap<K, V, S>> for ValueMap {
    fn from(map: IndexMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for ValueMap {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for ValueMap {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position_on_replace() {
        let mut map = ValueMap::new();
        map.insert(Value::from("first"), Value::from(1));
        map.insert(Value::from("second"), Value::from(2));
        map.insert(Value::from("first"), Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from("first"), Value::from("second")]);
        assert_eq!(map.get(&Value::from("first")), Some(&Value::from(3)));
    }

    #[test]
    fn test_from_indexmap_keeps_insertion_order() {
        let mut source = IndexMap::new();
        source.insert("zeta", 1);
        source.insert("alpha", 2);

        let map = ValueMap::from(source);
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Value::from("zeta"), Value::from("alpha")]);
    }

    #[test]
    fn test_from_btreemap_uses_key_order() {
        let source: BTreeMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        let map = ValueMap::from(source);
        let values: Vec<_> = map.values().cloned().collect();
        assert_eq!(values, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_null_key() {
        let mut map = ValueMap::new();
        map.insert(Value::Null, Value::Null);
        assert_eq!(map.get(&Value::Null), Some(&Value::Null));
        assert!(!map.is_empty());
    }
}
