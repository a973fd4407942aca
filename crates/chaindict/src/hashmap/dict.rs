use std::borrow::Borrow;
use std::ops::{Index, IndexMut};

use crate::Result;
use crate::hashing::KeyHash;

use super::hash_table::{HashTable, IntoIter, Iter};

/// A key-value map over separately chained, prime sized buckets.
///
/// The first value stored for a key wins: adding an existing key is a no-op.
/// Change a stored value through [`HashDict::get_mut`] or indexing instead.
///
/// ```
/// use chaindict::{Error, HashDict};
///
/// let mut dict = HashDict::new();
/// dict.add(1, "one");
/// dict.add(2, "two");
///
/// dict[&1] = "uno";
/// assert_eq!(dict.get(&1), Ok(&"uno"));
/// assert_eq!(dict.pop(&2), Ok("two"));
/// assert_eq!(dict.pop(&2), Err(Error::KeyNotFound));
/// ```
pub struct HashDict<K, V> {
    table: HashTable<K, V>,
}

impl<K, V> HashDict<K, V> {
    /// Creates an empty dict with 5 buckets
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Returns the number of key-value pairs
    pub fn size(&self) -> usize {
        self.table.used()
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.table.bucket_count()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Pairs per bucket as a percentage, the table grows once this passes 75
    pub fn occupancy(&self) -> f32 {
        self.table.occupancy()
    }

    /// Visits every pair, bucket by bucket
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: KeyHash + PartialEq, V> HashDict<K, V> {
    /// Adds `key` with `value` unless `key` is already present.
    ///
    /// Returns whether the pair was stored. If the dict is more than 75%
    /// full it grows to the next prime capacity before the pair goes in.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.table.insert(key, value)
    }

    /// Same as [`HashDict::add`], but a failure to reserve the grown bucket
    /// array comes back as [`Error::AllocationFailure`](crate::Error::AllocationFailure)
    /// with the dict unchanged.
    ///
    /// Only that outer reservation is fallible. Growing a single chain while
    /// rehashing or storing the pair still aborts on allocation failure.
    pub fn try_add(&mut self, key: K, value: V) -> Result<bool> {
        self.table.try_insert(key, value)
    }

    /// Removes `key` and hands back its value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if `key` is absent,
    /// the size stays the same.
    pub fn pop<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.remove(key).map(|(_, v)| v)
    }

    pub fn is_in<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.table.get_mut(key)
    }
}

impl<K, V> Default for HashDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q, V> Index<&Q> for HashDict<K, V>
where
    K: KeyHash + PartialEq + Borrow<Q>,
    Q: KeyHash + PartialEq + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not in the dict
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K, Q, V> IndexMut<&Q> for HashDict<K, V>
where
    K: KeyHash + PartialEq + Borrow<Q>,
    Q: KeyHash + PartialEq + ?Sized,
{
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for HashDict<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: KeyHash + PartialEq, V> FromIterator<(K, V)> for HashDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: KeyHash + PartialEq, V> Extend<(K, V)> for HashDict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.add(k, v);
        }
    }
}

impl<K, V> IntoIterator for HashDict<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a HashDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
