//! Loading problem instances from text.
//!
//! Kept apart from the solvers, which only ever see a
//! [`DistanceMatrix`](crate::distance::DistanceMatrix).

mod coordinates;

pub use coordinates::{parse_locations, read_locations};
