use std::borrow::Borrow;

use crate::Result;
use crate::hashing::KeyHash;

use super::hash_table::{self, HashTable};

/// A set of keys, sharing [`HashDict`](super::HashDict)'s table with `()` values.
///
/// ```
/// use chaindict::HashSet;
///
/// let mut set: HashSet<&str> = ["red", "green"].into_iter().collect();
/// assert!(set.is_in("red"));
/// assert!(!set.add("green"));
/// assert_eq!(set.pop("red"), Ok("red"));
/// assert_eq!(set.size(), 1);
/// ```
pub struct HashSet<K> {
    table: HashTable<K, ()>,
}

impl<K> HashSet<K> {
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.table.used()
    }

    pub fn capacity(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn occupancy(&self) -> f32 {
        self.table.occupancy()
    }

    pub fn iter(&self) -> SetIter<'_, K> {
        SetIter(self.table.iter())
    }
}

impl<K: KeyHash + PartialEq> HashSet<K> {
    /// Adds `key` unless it is already in the set, returning whether it was added
    pub fn add(&mut self, key: K) -> bool {
        self.table.insert(key, ())
    }

    /// Fallible growth, see [`HashDict::try_add`](super::HashDict::try_add)
    pub fn try_add(&mut self, key: K) -> Result<bool> {
        self.table.try_insert(key, ())
    }

    pub fn is_in<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.contains_key(key)
    }

    /// Removes `key`, handing back the stored key
    pub fn pop<Q>(&mut self, key: &Q) -> Result<K>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.remove(key).map(|(k, ())| k)
    }
}

impl<K> Default for HashSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for HashSet<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: KeyHash + PartialEq> FromIterator<K> for HashSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: KeyHash + PartialEq> Extend<K> for HashSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for k in iter {
            self.add(k);
        }
    }
}

impl<K> IntoIterator for HashSet<K> {
    type Item = K;
    type IntoIter = SetIntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIter(self.table.into_iter())
    }
}

impl<'a, K> IntoIterator for &'a HashSet<K> {
    type Item = &'a K;
    type IntoIter = SetIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

pub struct SetIter<'a, K>(hash_table::Iter<'a, K, ()>);

impl<'a, K> Iterator for SetIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIter<'_, K> {}

pub struct SetIntoIter<K>(hash_table::IntoIter<K, ()>);

impl<K> Iterator for SetIntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, ())| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K> ExactSizeIterator for SetIntoIter<K> {}
