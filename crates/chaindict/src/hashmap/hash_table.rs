use std::borrow::Borrow;

use log::debug;

use crate::bucket::{self, Bucket};
use crate::hashing::KeyHash;
use crate::{Error, INITIAL_CAPACITY, INITIAL_GROWTH_EXPONENT, MAX_OCCUPANCY_PERCENT, Result};

use super::primes;

/// The separate-chaining engine shared by [`HashDict`](super::HashDict)
/// and [`HashSet`](super::HashSet).
pub(crate) struct HashTable<K, V> {
    pub(crate) buckets: Vec<Bucket<K, V>>,
    pub(crate) items: usize,
    pub(crate) growth_exponent: u32,
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V> {
    pub fn new() -> Self {
        Self {
            buckets: (0..INITIAL_CAPACITY).map(|_| Bucket::new()).collect(),
            items: 0,
            growth_exponent: INITIAL_GROWTH_EXPONENT,
        }
    }

    /// Returns the number of entries in the table
    pub fn used(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.used() == 0`
    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }

    /// Returns the number of buckets, or "slots" of the table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Percentage of entries per bucket, `0` for a table without buckets
    pub fn occupancy(&self) -> f32 {
        if self.bucket_count() == 0 {
            0f32
        } else {
            (self.items as f32 / self.bucket_count() as f32) * 100f32
        }
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.items,
        }
    }

    fn needs_resize(&self) -> bool {
        self.occupancy() > MAX_OCCUPANCY_PERCENT
    }

    /// Maps a hash into `0..capacity`, negative hashes included
    pub(crate) fn bucket_index(hash: i64, capacity: usize) -> usize {
        debug_assert!(capacity > 0, "indexing into a table without buckets");
        hash.rem_euclid(capacity as i64) as usize
    }
}

impl<K: KeyHash + PartialEq, V> HashTable<K, V> {
    /// Inserts the entry, growing the table first if it is too full.
    ///
    /// Returns whether the entry was stored, a duplicate key keeps the
    /// value that was there first.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.needs_resize() {
            self.resize();
        }
        self.insert_without_resize(key, value)
    }

    /// Like [`Self::insert`] but reports a failed allocation of the
    /// grown bucket array instead of aborting.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<bool> {
        if self.needs_resize() {
            self.try_resize()?;
        }
        Ok(self.insert_without_resize(key, value))
    }

    fn insert_without_resize(&mut self, key: K, value: V) -> bool {
        let i = self.idx(&key);
        let stored = self.buckets[i].add(key, value);
        if stored {
            self.items += 1;
        }
        stored
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.buckets[self.idx(key)].get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        let i = self.idx(key);
        self.buckets[i].get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        self.buckets[self.idx(key)].contains(key)
    }

    /// Removes `key`, the count only drops once the bucket gave the entry up
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: KeyHash + PartialEq + ?Sized,
    {
        let i = self.idx(key);
        let bucket = &mut self.buckets[i];
        if bucket.is_empty() {
            return Err(Error::KeyNotFound);
        }

        let entry = bucket.remove(key)?;
        self.items -= 1;
        Ok(entry)
    }

    // [private]

    fn idx<Q: KeyHash + ?Sized>(&self, key: &Q) -> usize {
        Self::bucket_index(key.key_hash(), self.bucket_count())
    }

    /// Resizes the table to the next prime capacity
    ///
    /// # Panics
    ///
    /// Allocation failure aborts, like any other `Vec` growth
    fn resize(&mut self) {
        let (cap, exponent) = primes::next_capacity(self.growth_exponent);
        let new_buckets: Vec<_> = (0..cap).map(|_| Bucket::new()).collect();

        self.growth_exponent = exponent;
        self.rehash_into(new_buckets);
    }

    fn try_resize(&mut self) -> Result<()> {
        let (cap, exponent) = primes::next_capacity(self.growth_exponent);
        let mut new_buckets = Vec::new();
        new_buckets.try_reserve_exact(cap)?;
        new_buckets.resize_with(cap, Bucket::new);

        self.growth_exponent = exponent;
        self.rehash_into(new_buckets);
        Ok(())
    }

    /// Moves every entry, bucket by bucket and in chain order,
    /// into `new_buckets` and makes them the table's buckets
    fn rehash_into(&mut self, new_buckets: Vec<Bucket<K, V>>) {
        let old_buckets = std::mem::replace(&mut self.buckets, new_buckets);
        let cap = self.bucket_count();
        debug!(
            target: "resize",
            "rehashing {} items from {} into {} buckets",
            self.items,
            old_buckets.len(),
            cap
        );

        for bucket in old_buckets {
            for (key, value) in bucket {
                let i = Self::bucket_index(key.key_hash(), cap);
                self.buckets[i].push_unique(key, value);
            }
        }
        // old buckets are all drained and dropped by now
    }
}

// [iterators]

pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    current: Option<bucket::Iter<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

pub struct IntoIter<K, V> {
    buckets: std::vec::IntoIter<Bucket<K, V>>,
    current: Option<bucket::IntoIter<K, V>>,
    remaining: usize,
}

impl<K, V> IntoIterator for HashTable<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.items,
            buckets: self.buckets.into_iter(),
            current: None,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(|it| it.next()) {
                self.remaining -= 1;
                return Some(entry);
            }
            self.current = Some(self.buckets.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.buckets)
            .field("items", &self.items)
            .field("growth_exponent", &self.growth_exponent)
            .finish()
    }
}
