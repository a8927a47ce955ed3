//! Distance matrices.
//!
//! Provides the dense, validated cost matrix the solvers read from.

mod matrix;

pub use matrix::DistanceMatrix;
