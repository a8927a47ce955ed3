//! Memoization of Held-Karp states.
//!
//! - [`StateKey`] — `(visited set, destination)` pair
//! - [`MemoEntry`] — Best cost and predecessor for one state
//! - [`MemoTable`] — Open-addressing, linear-probing store with 50% load doubling

mod key;
mod table;

pub use key::{MemoEntry, StateKey};
pub use table::{expected_states, MemoTable, MAX_TABLE_CAPACITY};
