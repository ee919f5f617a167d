//! A wrapper around a sorted vector of tuples that backs [maps][`crate::Value::Map`].
//!
//! Keys are unique and kept in ascending order, so iteration order is the key order and
//! two maps holding the same entries are equal and encode identically.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use cbor_value::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let key = "a";
//! let value = 1;
//!
//! // from a `BTreeMap`
//! let mut btmap = BTreeMap::new();
//! btmap.insert(key, value);
//!
//! let bt_vm = VecMap::from(btmap);
//!
//! // from a `HashMap`
//! let mut hashmap = HashMap::new();
//! hashmap.insert(key, value);
//!
//! let hm_vm = VecMap::from(hashmap);
//!
//! // from a vector of tuples, where the last duplicate key wins
//! let entries = vec![(key, 0), (key, value)];
//!
//! let vec_vm = VecMap::from(entries);
//!
//! assert_eq!(bt_vm, hm_vm);
//! assert_eq!(hm_vm, vec_vm);
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    hash::*,
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// A map implemented as a sorted [`Vec`] of pairs.
///
/// See also: [module level documentation](`crate::vecmap`).
pub struct VecMap<K: Ord, V>(Vec<(K, V)>);

impl<K: Ord, V> Default for VecMap<K, V> {
    fn default() -> Self { VecMap(Vec::new()) }
}

impl<K: Ord, V> VecMap<K, V> {
    /// Creates an empty [`VecMap`].
    pub fn new() -> Self { Self::default() }

    /// Returns length.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![("foo", "bar")]);
    ///
    /// // should have one element
    /// assert_eq!(vmap.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`VecMap`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an [`Iter`] of the key value pairs, in key order.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![(3, "baz"), (1, "foo"), (2, "bar")]);
    ///
    /// // get first element
    /// let (k, v) = vmap.iter().next().unwrap();
    ///
    /// assert_eq!((k, v), (&1, &"foo"))
    /// ```
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }

    /// The entries as a slice, in key order.
    pub fn as_slice(&self) -> &[(K, V)] { &self.0 }

    pub fn keys(&self) -> impl Iterator<Item = &K> { self.0.iter().map(|(k, _)| k) }

    pub fn values(&self) -> impl Iterator<Item = &V> { self.0.iter().map(|(_, v)| v) }

    fn search(&self, key: &K) -> Result<usize, usize> { self.0.binary_search_by(|(k, _)| k.cmp(key)) }

    /// Looks up the value stored under `key`.
    ///
    /// # Example
    ///
    /// ```
    /// use cbor_value::prelude::*;
    ///
    /// let vmap = VecMap::from(vec![(1, "foo"), (2, "bar")]);
    ///
    /// assert_eq!(vmap.get(&2), Some(&"bar"));
    /// assert_eq!(vmap.get(&3), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> { self.search(key).ok().map(|i| &self.0[i].1) }

    pub fn contains_key(&self, key: &K) -> bool { self.search(key).is_ok() }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.0[i].1, value)),
            Err(i) => {
                self.0.insert(i, (key, value));
                None
            }
        }
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    /// Sorts the entries by key. When a key appears more than once the last entry is kept.
    fn from(mut v: Vec<(K, V)>) -> Self {
        // stable, so equal keys stay in input order
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        v.reverse();
        v.dedup_by(|(k2, _), (k1, _)| k1 == k2);
        v.reverse();
        VecMap(v)
    }
}

impl<K: Ord + Hash, V, S: BuildHasher> From<HashMap<K, V, S>> for VecMap<K, V> {
    fn from(hm: HashMap<K, V, S>) -> Self {
        let v: Vec<(K, V)> = hm.into_iter().collect();
        v.into()
    }
}

impl<K: Ord, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<'a, K: Ord, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> { self.0.iter() }
}

impl<K: Ord, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap::from(Vec::from_iter(iter))
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for VecMap<K, V> {
    // already sorted and unique
    fn from(bt: BTreeMap<K, V>) -> Self { VecMap(bt.into_iter().collect()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_duplicate_wins() {
        let vm = VecMap::from(vec![(2, "a"), (1, "b"), (2, "c"), (1, "d"), (2, "e")]);
        assert_eq!(vm.as_slice(), &[(1, "d"), (2, "e")]);
    }

    #[test]
    fn insert_keeps_order() {
        let mut vm = VecMap::new();
        assert_eq!(vm.insert(3, 'c'), None);
        assert_eq!(vm.insert(1, 'a'), None);
        assert_eq!(vm.insert(2, 'b'), None);
        assert_eq!(vm.insert(1, 'z'), Some('a'));
        assert_eq!(vm.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(vm.values().copied().collect::<Vec<_>>(), vec!['z', 'b', 'c']);
        assert!(vm.contains_key(&2));
        assert!(!vm.contains_key(&4));
        assert_eq!(vm.len(), 3);
    }

    #[test]
    fn from_hashmap_is_sorted() {
        let hm: HashMap<_, _> = vec![("y", 2), ("x", 1), ("z", 3)].into_iter().collect();
        let vm = VecMap::from(hm);
        assert_eq!(vm.as_slice(), &[("x", 1), ("y", 2), ("z", 3)]);
    }
}
