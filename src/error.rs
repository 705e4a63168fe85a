//! Error type shared by every fallible `ChainedHashMap` operation

use thiserror::Error;

/// Errors raised by the map and its configuration.
///
/// Every error is detected before the map is mutated, so a failed call leaves the map untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// A key that is not a string was passed to a key-accepting operation
    #[error("Trying to pass a non-string key of type `{type_name}`")]
    InvalidKeyType {
        /// Name of the rejected key type
        type_name: &'static str,
    },
    /// A computed bucket index fell outside `0..capacity`
    #[error("Bucket index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Bucket count at the time of the check
        capacity: usize,
    },
    /// The load factor threshold must lie in `(0, 1]`
    #[error("Load factor must be within (0, 1], got: {0}")]
    InvalidLoadFactor(f64),
    /// The bucket count must be greater than zero
    #[error("Capacity must be greater than zero")]
    InvalidCapacity,
}
