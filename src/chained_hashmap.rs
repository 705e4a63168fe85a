use crate::{KeyLike, MapConfig, MapError, polynomial_hash};
use std::{iter, mem};
use tracing::{debug, trace};

/// A key-value pair stored in a chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key, fixed once stored
    key: String,
    /// The value associated with the key, replaced by re-insertion
    value: V,
}

/// Entries sharing a bucket index, in insertion order
type Bucket<V> = Vec<Entry<V>>;

/// A string-keyed hash table resolving collisions with chained buckets.
///
/// Keys are placed in bucket `hash(key) % capacity` using a polynomial hash over the key's
/// character codes. Each bucket is a chain scanned linearly. When a new key would bring the ratio
/// of entries to buckets to the load factor threshold, the bucket array is doubled and every
/// entry is rehashed in a single pass.
///
/// Every key-accepting operation takes any [`KeyLike`] value and fails with
/// [`MapError::InvalidKeyType`] when it is not a string.
///
/// Note: This implementation is not thread-safe. Callers sharing a map across threads must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<V> {
    /// Fixed-length array of chains, its length is the capacity
    buckets: Box<[Bucket<V>]>,
    /// Current number of entries across all chains
    size: usize,
    /// Ratio of entries to buckets at which the table doubles
    load_factor: f64,
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ChainedHashMap<V> {
    /// Creates a new `ChainedHashMap` with the default load factor (0.75) and 16 buckets
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(MapConfig::default())
    }

    /// Creates a new `ChainedHashMap` with the specified number of buckets
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        // Ensure there is at least one bucket to hash into
        Self::from_config(MapConfig::default().with_capacity(capacity.max(1)))
    }

    /// Creates a new `ChainedHashMap` from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns the validation error of `config` when its load factor or capacity is unusable.
    pub fn with_config(config: MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Builds the table from an already validated configuration
    fn from_config(config: MapConfig) -> Self {
        Self {
            buckets: Self::empty_buckets(config.capacity),
            size: 0,
            load_factor: config.load_factor,
        }
    }

    /// Allocates `capacity` empty chains
    fn empty_buckets(capacity: usize) -> Box<[Bucket<V>]> {
        iter::repeat_with(Vec::new).take(capacity).collect()
    }

    /// Checks that `index` addresses one of the current buckets
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IndexOutOfRange`] when `index >= capacity`.
    pub fn validate_index(&self, index: usize) -> Result<(), MapError> {
        Self::check_index(index, self.capacity())
    }

    /// Checks `index` against an arbitrary bucket count
    fn check_index(index: usize, capacity: usize) -> Result<(), MapError> {
        if index >= capacity {
            return Err(MapError::IndexOutOfRange { index, capacity });
        }
        Ok(())
    }

    /// Hashes a string key for a bucket count and validates the result
    fn index_for(key: &str, capacity: usize) -> Result<usize, MapError> {
        let index = polynomial_hash(key, capacity);
        Self::check_index(index, capacity)?;
        Ok(index)
    }

    /// Returns the bucket index `key` maps to at the current capacity
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn bucket_index<Q: KeyLike + ?Sized>(&self, key: &Q) -> Result<usize, MapError> {
        Self::index_for(key.try_key_str()?, self.capacity())
    }

    /// Returns the chain `key` hashes to
    fn chain(&self, key: &str) -> Result<&Bucket<V>, MapError> {
        let index = Self::index_for(key, self.capacity())?;
        self.buckets
            .get(index)
            .ok_or(MapError::IndexOutOfRange { index, capacity: self.capacity() })
    }

    /// Returns the chain `key` hashes to, mutably
    fn chain_mut(&mut self, key: &str) -> Result<&mut Bucket<V>, MapError> {
        let capacity = self.capacity();
        let index = Self::index_for(key, capacity)?;
        self.buckets.get_mut(index).ok_or(MapError::IndexOutOfRange { index, capacity })
    }

    /// Whether one more entry would reach the load factor threshold
    #[allow(clippy::cast_precision_loss)]
    fn needs_grow(&self) -> bool {
        self.size.saturating_add(1) as f64 / self.capacity() as f64 >= self.load_factor
    }

    /// Inserts a key-value pair, or replaces the value if the key is already present.
    ///
    /// Returns the previous value on update. Updating never resizes the table. Inserting a new
    /// key first checks the load factor with the prospective entry count and doubles the table
    /// when the threshold is reached.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string. The map is unchanged.
    pub fn set<Q: KeyLike>(&mut self, key: Q, value: V) -> Result<Option<V>, MapError> {
        let key = key.try_key_str()?;
        let grow = self.needs_grow();
        let chain = self.chain_mut(key)?;

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        let entry = Entry { key: key.to_owned(), value };
        if grow {
            self.grow_with(entry)?;
        } else {
            chain.push(entry);
            self.size = self.size.saturating_add(1);
        }

        Ok(None)
    }

    /// Doubles the bucket array and rehashes every entry together with `pending`.
    ///
    /// The new array is filled in one flat pass over a snapshot of the entries in
    /// bucket-then-chain order, followed by `pending`, and then replaces the old one.
    fn grow_with(&mut self, pending: Entry<V>) -> Result<(), MapError> {
        let old_capacity = self.capacity();
        let capacity = old_capacity.saturating_mul(2);

        // Placement is computed before anything moves so a failure leaves the table intact
        let placement = self
            .iter()
            .map(|(key, _)| key)
            .chain(iter::once(pending.key.as_str()))
            .map(|key| Self::index_for(key, capacity))
            .collect::<Result<Vec<_>, _>>()?;

        let mut buckets = Self::empty_buckets(capacity);
        let snapshot = mem::take(&mut self.buckets)
            .into_vec()
            .into_iter()
            .flatten()
            .chain(iter::once(pending));

        for (index, entry) in placement.iter().zip(snapshot) {
            if let Some(chain) = buckets.get_mut(*index) {
                chain.push(entry);
            }
        }

        self.buckets = buckets;
        self.size = placement.len();

        debug!(old_capacity, capacity, entries = self.size, "rehashed into doubled bucket array");
        Ok(())
    }

    /// Retrieve a value for a given key
    ///
    /// A missing key is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn get<Q: KeyLike + ?Sized>(&self, key: &Q) -> Result<Option<&V>, MapError> {
        let key = key.try_key_str()?;
        let chain = self.chain(key)?;
        Ok(chain.iter().find(|entry| entry.key == key).map(|entry| &entry.value))
    }

    /// Get a mutable reference to a value for a given key
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn get_mut<Q: KeyLike + ?Sized>(&mut self, key: &Q) -> Result<Option<&mut V>, MapError> {
        let key = key.try_key_str()?;
        let chain = self.chain_mut(key)?;
        Ok(chain.iter_mut().find(|entry| entry.key == key).map(|entry| &mut entry.value))
    }

    /// Returns true if the map holds an entry for `key`, whatever its value
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn has<Q: KeyLike + ?Sized>(&self, key: &Q) -> Result<bool, MapError> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes the entry for `key` and returns its value
    ///
    /// The remaining entries of the chain keep their relative order. The capacity never shrinks.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn take<Q: KeyLike + ?Sized>(&mut self, key: &Q) -> Result<Option<V>, MapError> {
        let key = key.try_key_str()?;
        let chain = self.chain_mut(key)?;

        let Some(position) = chain.iter().position(|entry| entry.key == key) else {
            return Ok(None);
        };
        let entry = chain.remove(position);
        self.size = self.size.saturating_sub(1);

        Ok(Some(entry.value))
    }

    /// Removes the entry for `key`, returning whether one was present
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKeyType`] when `key` is not a string.
    pub fn remove<Q: KeyLike + ?Sized>(&mut self, key: &Q) -> Result<bool, MapError> {
        Ok(self.take(key)?.is_some())
    }

    /// Returns the number of elements in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears the hash map, keeping the current number of buckets
    pub fn clear(&mut self) {
        trace!(entries = self.size, capacity = self.capacity(), "clearing");
        self.buckets = Self::empty_buckets(self.capacity());
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs in bucket-then-chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { buckets: &self.buckets, bucket: 0, slot: 0 }
    }

    /// Returns the keys in bucket-then-chain order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Returns the number of buckets in the hash map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor threshold the map grows at
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the current ratio of entries to buckets
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn current_load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Returns the length of every chain, indexed by bucket
    #[must_use]
    pub fn bucket_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }
}

impl<V: Clone> ChainedHashMap<V> {
    /// Returns the values in bucket-then-chain order
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the key-value pairs in bucket-then-chain order
    #[must_use]
    pub fn entries(&self) -> Vec<(String, V)> {
        self.iter().map(|(key, value)| (key.to_owned(), value.clone())).collect()
    }
}

/// Iterator over the key-value pairs of the hash table
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Reference to the buckets in the hash map
    buckets: &'a [Bucket<V>],
    /// Bucket currently being walked
    bucket: usize,
    /// Position within the current chain
    slot: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chain) = self.buckets.get(self.bucket) {
            if let Some(entry) = chain.get(self.slot) {
                self.slot = self.slot.saturating_add(1);
                return Some((entry.key.as_str(), &entry.value));
            }
            self.bucket = self.bucket.saturating_add(1);
            self.slot = 0;
        }
        None
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
