//! Fixed-width bitmask set of cities.

use std::fmt;

/// A set of city indices packed into a `u32`, bit `c` standing for city `c`.
///
/// Two sets holding the same cities always have the same bits, so a set is a
/// canonical key on its own. Iteration is in ascending city order.
///
/// # Examples
///
/// ```
/// use held_karp::subset::CitySet;
///
/// let s: CitySet = [3, 1, 4].into_iter().collect();
/// assert_eq!(s.len(), 3);
/// assert!(s.contains(4));
/// assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3, 4]);
/// assert_eq!(s.without(3).to_string(), "{1, 4}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CitySet(u32);

impl CitySet {
    /// Number of distinct cities a set can hold.
    pub const CAPACITY: usize = u32::BITS as usize;

    /// The empty set.
    pub const EMPTY: CitySet = CitySet(0);

    /// Wraps raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The set `{city}`.
    pub fn singleton(city: usize) -> Self {
        Self::EMPTY.with(city)
    }

    /// Every city of an `n`-city instance except the origin: `{1, .., n-1}`.
    pub fn non_origin(n: usize) -> Self {
        debug_assert!(n <= Self::CAPACITY);
        if n <= 1 {
            return Self::EMPTY;
        }
        let all = if n == Self::CAPACITY {
            u32::MAX
        } else {
            (1u32 << n) - 1
        };
        Self(all & !1)
    }

    /// Returns `true` if `city` is in the set.
    pub fn contains(self, city: usize) -> bool {
        city < Self::CAPACITY && self.0 & (1 << city) != 0
    }

    /// Adds `city` to the set.
    pub fn insert(&mut self, city: usize) {
        debug_assert!(city < Self::CAPACITY, "city {city} out of range");
        self.0 |= 1 << city;
    }

    /// Removes `city` from the set.
    pub fn remove(&mut self, city: usize) {
        debug_assert!(city < Self::CAPACITY, "city {city} out of range");
        self.0 &= !(1 << city);
    }

    /// Copy of this set with `city` added.
    pub fn with(mut self, city: usize) -> Self {
        self.insert(city);
        self
    }

    /// Copy of this set with `city` removed.
    pub fn without(mut self, city: usize) -> Self {
        self.remove(city);
        self
    }

    /// Number of cities in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set has no cities.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the cities in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

/// Ascending iterator over the cities of a [`CitySet`].
#[derive(Debug, Clone)]
pub struct Iter(u32);

impl Iterator for Iter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let city = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(city)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for CitySet {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<usize> for CitySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for city in iter {
            set.insert(city);
        }
        set
    }
}

impl fmt::Display for CitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, city) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{city}")?;
        }
        f.write_str("}")
    }
}
