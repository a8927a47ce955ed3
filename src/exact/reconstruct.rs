//! Tour recovery by following predecessor links.

use crate::error::{Error, Result};
use crate::memo::{MemoTable, StateKey};
use crate::models::Tour;

/// Walks predecessor links back from `terminal` and returns the forward tour.
///
/// `terminal` is the closing state: the full set of non-origin cities with
/// city 0 as destination. Each step reads the current state's predecessor,
/// drops the current destination from the visited set, and continues from
/// the predecessor until it reaches city 0. Nothing is recomputed.
///
/// Fails with [`Error::MissingState`] if a link points at a state that was
/// never stored, and with [`Error::Internal`] if the walk is not a
/// Hamiltonian cycle.
///
/// # Examples
///
/// ```
/// use held_karp::exact::reconstruct_tour;
/// use held_karp::memo::{MemoTable, StateKey};
/// use held_karp::subset::CitySet;
///
/// let mut table = MemoTable::with_capacity(8).unwrap();
/// let full = CitySet::singleton(1);
/// table.put(StateKey::new(full, 1), 2.0, 0).unwrap();
/// table.put(StateKey::new(full, 0), 4.0, 1).unwrap();
///
/// let tour = reconstruct_tour(&table, StateKey::new(full, 0)).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 0]);
/// assert_eq!(tour.cost(), 4.0);
/// ```
pub fn reconstruct_tour(table: &MemoTable, terminal: StateKey) -> Result<Tour> {
    let cost = table.entry(&terminal)?.cost();
    let n = terminal.visited().len() + 1;

    let mut backwards = Vec::with_capacity(n + 1);
    backwards.push(terminal.city());
    let mut key = terminal;
    loop {
        let pred = table.entry(&key)?.predecessor();
        backwards.push(pred);
        if pred == 0 {
            break;
        }
        if backwards.len() > n + 1 {
            return Err(Error::internal(format!(
                "predecessor chain from {terminal:?} longer than {n} cities"
            )));
        }
        key = StateKey::new(key.visited().without(key.city()), pred);
    }
    backwards.reverse();

    let tour = Tour::new(backwards, cost);
    if !tour.is_valid_for(n) {
        return Err(Error::internal(format!(
            "predecessor chain produced invalid tour {tour}"
        )));
    }
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subset::CitySet;

    fn set(cities: &[usize]) -> CitySet {
        cities.iter().copied().collect()
    }

    /// Chain for 0 -> 2 -> 1 -> 3 -> 0.
    fn four_city_table() -> MemoTable {
        let mut t = MemoTable::with_capacity(16).expect("allocatable");
        t.put(StateKey::new(set(&[2]), 2), 1.0, 0).expect("stored");
        t.put(StateKey::new(set(&[1, 2]), 1), 2.0, 2).expect("stored");
        t.put(StateKey::new(set(&[1, 2, 3]), 3), 3.0, 1).expect("stored");
        t.put(StateKey::new(set(&[1, 2, 3]), 0), 4.0, 3).expect("stored");
        t
    }

    #[test]
    fn test_follows_chain_forward() {
        let t = four_city_table();
        let tour = reconstruct_tour(&t, StateKey::new(set(&[1, 2, 3]), 0)).expect("chain");
        assert_eq!(tour.cities(), &[0, 2, 1, 3, 0]);
        assert_eq!(tour.cost(), 4.0);
    }

    #[test]
    fn test_missing_link() {
        let mut t = four_city_table();
        // Point the terminal at a state that was never stored.
        t.put(StateKey::new(set(&[1, 2, 3]), 0), 4.0, 2).expect("stored");
        let err = reconstruct_tour(&t, StateKey::new(set(&[1, 2, 3]), 0)).unwrap_err();
        assert!(matches!(err, Error::MissingState { city: 2, .. }));
    }

    #[test]
    fn test_missing_terminal() {
        let t = MemoTable::with_capacity(8).expect("allocatable");
        let err = reconstruct_tour(&t, StateKey::new(set(&[1]), 0)).unwrap_err();
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_short_chain_is_invalid() {
        let mut t = MemoTable::with_capacity(16).expect("allocatable");
        // Terminal over {1, 2} whose chain skips city 2.
        t.put(StateKey::new(set(&[1, 2]), 0), 2.0, 1).expect("stored");
        t.put(StateKey::new(set(&[1, 2]), 1), 1.0, 0).expect("stored");
        let err = reconstruct_tour(&t, StateKey::new(set(&[1, 2]), 0)).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }
}
