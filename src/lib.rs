//! # held-karp
//!
//! Exact Traveling Salesman solving with the Held-Karp dynamic program over
//! subsets of cities.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Tour)
//! - [`distance`] — Validated dense distance matrix
//! - [`subset`] — Bitmask city sets, subset enumeration, rotation variants
//! - [`memo`] — State keys and the open-addressing memo table
//! - [`exact`] — Held-Karp solver, tour reconstruction, brute-force oracle
//! - [`io`] — Coordinate file loading
//! - [`error`] — Crate error type

pub mod distance;
pub mod error;
pub mod exact;
pub mod io;
pub mod memo;
pub mod models;
pub mod subset;

pub use error::{Error, Result};
