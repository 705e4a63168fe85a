//! Utility functions and diagnostics for `ChainedHashMap`

use crate::{ChainedHashMap, KeyLike, MapError};

/// Snapshot of how entries are spread across the chains of a map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainStats {
    /// Number of buckets
    pub buckets: usize,
    /// Number of entries across all chains
    pub entries: usize,
    /// Number of buckets holding no entry
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Average length of the non-empty chains, 0 when the map is empty
    pub mean_chain: f64,
}

impl ChainStats {
    /// Collects the chain statistics of `map`
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn of<V>(map: &ChainedHashMap<V>) -> Self {
        let lengths = map.bucket_lengths();
        let empty_buckets = lengths.iter().filter(|&&len| len == 0).count();
        let occupied = lengths.len().saturating_sub(empty_buckets);
        let entries = lengths.iter().sum::<usize>();

        Self {
            buckets: lengths.len(),
            entries,
            empty_buckets,
            longest_chain: lengths.iter().copied().max().unwrap_or(0),
            mean_chain: if occupied == 0 { 0.0 } else { entries as f64 / occupied as f64 },
        }
    }
}

/// Creates a `ChainedHashMap` from an iterator of key-value pairs
///
/// Later pairs overwrite earlier ones with the same key.
///
/// # Errors
///
/// Returns [`MapError::InvalidKeyType`] for the first key that is not a string.
pub fn from_entries<K, V, I>(iter: I) -> Result<ChainedHashMap<V>, MapError>
where
    K: KeyLike,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = ChainedHashMap::new();

    for (key, value) in iter {
        map.set(key, value)?;
    }

    Ok(map)
}
