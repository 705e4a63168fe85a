//! Construction parameters for `ChainedHashMap`

use crate::MapError;

/// Load factor threshold used when none is given
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Initial bucket count used when none is given
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor threshold and initial bucket count of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Ratio of entries to buckets at which the map doubles, within `(0, 1]`
    pub load_factor: f64,
    /// Initial number of buckets, greater than zero
    pub capacity: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { load_factor: DEFAULT_LOAD_FACTOR, capacity: DEFAULT_CAPACITY }
    }
}

impl MapConfig {
    /// Sets the load factor threshold
    #[must_use]
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the initial bucket count
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks that the configuration describes a usable map
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidLoadFactor`] when the load factor is not within `(0, 1]`
    /// (NaN included) and [`MapError::InvalidCapacity`] when the capacity is zero.
    pub fn validate(&self) -> Result<(), MapError> {
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(MapError::InvalidLoadFactor(self.load_factor));
        }
        if self.capacity == 0 {
            return Err(MapError::InvalidCapacity);
        }
        Ok(())
    }
}
