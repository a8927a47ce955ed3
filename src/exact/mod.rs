//! Exact TSP solvers.
//!
//! - [`HeldKarp`] — Held-Karp subset dynamic program (1962), O(n² · 2ⁿ)
//! - [`reconstruct_tour`] — Predecessor walk from the closing state
//! - [`brute_force`] — Permutation enumeration, O(n!), for cross-checking

mod brute_force;
mod config;
mod held_karp;
mod reconstruct;

pub use brute_force::{brute_force, BRUTE_FORCE_MAX_CITIES};
pub use config::{HeldKarpConfig, DEFAULT_MAX_CITIES, MAX_SUPPORTED_CITIES};
pub use held_karp::{held_karp, HeldKarp, SolveStats};
pub use reconstruct::reconstruct_tour;
