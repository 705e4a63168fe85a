//! # Chained Hash Map
//!
//! A Rust implementation of a string-keyed hash table with separate chaining.
//!
//! Keys are hashed with a polynomial accumulation over their character codes, taken modulo the
//! bucket count at every step. Collisions are resolved by appending to a per-bucket chain. When
//! inserting a new key would bring the ratio of entries to buckets to the load factor threshold,
//! the bucket array doubles and every entry is rehashed.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chained_map::ChainedHashMap;
//!
//! // Create a new hash map with 16 buckets and a 0.75 load factor
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! map.set("apple", 1)?;
//! map.set("banana", 2)?;
//!
//! // Retrieve values
//! assert_eq!(map.get("apple")?, Some(&1));
//!
//! // Update values
//! map.set("apple", 10)?;
//! assert_eq!(map.get("apple")?, Some(&10));
//! assert_eq!(map.len(), 2);
//!
//! // Remove values
//! assert!(map.remove("apple")?);
//! assert_eq!(map.get("apple")?, None);
//! # Ok::<(), chained_map::MapError>(())
//! ```
//!
//! ## Key Types
//!
//! Only strings are valid keys. Other [`KeyLike`] values are rejected at hashing time:
//!
//! ```rust
//! use chained_map::{ChainedHashMap, MapError};
//!
//! let mut map: ChainedHashMap<&str> = ChainedHashMap::new();
//! assert!(matches!(map.set(42, "answer"), Err(MapError::InvalidKeyType { .. })));
//! assert!(map.is_empty());
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use chained_map::{ChainedHashMap, MapConfig};
//!
//! let config = MapConfig::default().with_capacity(4).with_load_factor(0.5);
//! let mut map = ChainedHashMap::with_config(config)?;
//!
//! map.set("one", 1)?;
//! map.set("two", 2)?;
//! assert_eq!(map.capacity(), 8);
//! # Ok::<(), chained_map::MapError>(())
//! ```

/// Module implementing the chained hash map itself
mod chained_hashmap;
/// Module holding the construction parameters
mod config;
/// Module defining the error type
mod error;
/// Module implementing the polynomial string hash
mod hashing;
/// Module implementing the runtime key-type guard
mod key;
/// Utility functions and diagnostics for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use config::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, MapConfig};
pub use error::MapError;
pub use hashing::{HASH_PRIME, polynomial_hash};
pub use key::KeyLike;
pub use utils::{ChainStats, from_entries};
