//! Memo keys and entries.

use crate::subset::CitySet;

/// A DP state: the set of visited non-origin cities and the city the partial
/// path currently ends at.
///
/// The terminal state uses the full set with city 0 as its destination.
/// Equality is structural on `(visited, city)`.
///
/// # Examples
///
/// ```
/// use held_karp::memo::StateKey;
/// use held_karp::subset::CitySet;
///
/// let key = StateKey::new(CitySet::from_bits(0b0110), 2);
/// assert_eq!(key.city(), 2);
/// assert_eq!(key.visited().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    visited: CitySet,
    city: u8,
}

impl StateKey {
    /// Creates a key for the state ending at `city` after visiting `visited`.
    pub fn new(visited: CitySet, city: usize) -> Self {
        debug_assert!(city < CitySet::CAPACITY, "city {city} out of range");
        Self {
            visited,
            city: city as u8,
        }
    }

    /// Visited cities.
    pub fn visited(&self) -> CitySet {
        self.visited
    }

    /// Destination city.
    pub fn city(&self) -> usize {
        self.city as usize
    }

    /// Packs the key into one integer, injective since `city < 32`.
    pub(crate) fn packed(&self) -> u64 {
        (u64::from(self.visited.bits()) << 5) | u64::from(self.city)
    }
}

/// A stored state: its key, best cost, and the city visited just before.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoEntry {
    key: StateKey,
    cost: f64,
    predecessor: u8,
}

impl MemoEntry {
    pub(crate) fn new(key: StateKey, cost: f64, predecessor: usize) -> Self {
        debug_assert!(predecessor < CitySet::CAPACITY);
        Self {
            key,
            cost,
            predecessor: predecessor as u8,
        }
    }

    /// The state this entry belongs to.
    pub fn key(&self) -> StateKey {
        self.key
    }

    /// Minimum cost of reaching the state from city 0.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// City visited immediately before the state's destination.
    pub fn predecessor(&self) -> usize {
        self.predecessor as usize
    }
}
