//! Visited-set representation and the enumerations the recurrence walks.
//!
//! - [`CitySet`] — Bitmask set of cities, a canonical key by construction
//! - [`subsets_of_size`] — All `k`-subsets of a universe in lexicographic order
//! - [`rotations`] — One variant per element, that element moved to the front

mod city_set;
mod combinations;
mod enumerator;

pub use city_set::{CitySet, Iter};
pub use combinations::{rotations, Rotation, Rotations};
pub use enumerator::{binomial, subsets_of_size, Subsets};
