//! Domain model types for exact TSP solving.
//!
//! Provides the located points read from coordinate files and the closed
//! tour produced by the solvers.

mod location;
mod tour;

pub use location::Location;
pub use tour::Tour;
