//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::memo::MAX_TABLE_CAPACITY;

/// Default bound on instance size.
///
/// A 20-city solve stores about five million states.
pub const DEFAULT_MAX_CITIES: usize = 20;

/// Largest instance whose derived memo table fits [`MAX_TABLE_CAPACITY`].
///
/// A 24-city solve stores about 96 million states in 2^28 slots.
pub const MAX_SUPPORTED_CITIES: usize = 24;

/// Configuration for [`HeldKarp`](super::HeldKarp).
///
/// # Examples
///
/// ```
/// use held_karp::exact::HeldKarpConfig;
///
/// let config = HeldKarpConfig::default()
///     .with_max_cities(12)
///     .with_initial_capacity(64);
/// assert_eq!(config.max_cities(), 12);
/// assert_eq!(config.initial_capacity(), Some(64));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKarpConfig {
    max_cities: usize,
    initial_capacity: Option<usize>,
}

impl HeldKarpConfig {
    /// Sets the largest instance the solver accepts.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    /// Overrides the memo table's starting capacity.
    ///
    /// By default the capacity is derived from the instance size so the table
    /// never resizes; a smaller value trades memory for rehashing.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Largest accepted instance size.
    pub fn max_cities(&self) -> usize {
        self.max_cities
    }

    /// Starting memo capacity override, if any.
    pub fn initial_capacity(&self) -> Option<usize> {
        self.initial_capacity
    }

    /// Checks the settings against the hard limits of the engine.
    pub fn validate(&self) -> Result<()> {
        if self.max_cities > MAX_SUPPORTED_CITIES {
            return Err(Error::invalid_config(format!(
                "max_cities {} exceeds the supported maximum of {MAX_SUPPORTED_CITIES}",
                self.max_cities
            )));
        }
        if self.max_cities < 2 {
            return Err(Error::invalid_config(format!(
                "max_cities {} leaves no solvable instance",
                self.max_cities
            )));
        }
        if let Some(capacity) = self.initial_capacity {
            if capacity > MAX_TABLE_CAPACITY {
                return Err(Error::invalid_config(format!(
                    "initial_capacity {capacity} exceeds the table limit of {MAX_TABLE_CAPACITY}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_cities: DEFAULT_MAX_CITIES,
            initial_capacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = HeldKarpConfig::default();
        assert_eq!(c.max_cities(), DEFAULT_MAX_CITIES);
        assert!(c.initial_capacity().is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        let c = HeldKarpConfig::default().with_max_cities(MAX_SUPPORTED_CITIES);
        assert!(c.validate().is_ok());

        let c = HeldKarpConfig::default().with_max_cities(MAX_SUPPORTED_CITIES + 1);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));

        let c = HeldKarpConfig::default().with_max_cities(1);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));

        let c = HeldKarpConfig::default().with_max_cities(32);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_initial_capacity() {
        let c = HeldKarpConfig::default().with_initial_capacity(MAX_TABLE_CAPACITY);
        assert!(c.validate().is_ok());

        let c = HeldKarpConfig::default().with_initial_capacity(MAX_TABLE_CAPACITY + 1);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_ceiling_table_is_within_limit() {
        let slots = crate::memo::MemoTable::capacity_for_cities(MAX_SUPPORTED_CITIES);
        assert!(slots <= MAX_TABLE_CAPACITY);
        let slots = crate::memo::MemoTable::capacity_for_cities(MAX_SUPPORTED_CITIES + 1);
        assert!(slots > MAX_TABLE_CAPACITY);
    }

    #[test]
    fn test_serde_round_trip() {
        let c = HeldKarpConfig::default().with_initial_capacity(128);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: HeldKarpConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }
}
