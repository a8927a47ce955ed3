//! Exhaustive permutation solver.
//!
//! Tries every ordering of cities `1..n` after the origin, in lexicographic
//! order, and keeps the first cheapest closed tour. Used to cross-check the
//! dynamic program on small instances.
//!
//! # Complexity
//!
//! O(n!) time, O(n) memory.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Largest instance [`brute_force`] accepts (9! orderings).
pub const BRUTE_FORCE_MAX_CITIES: usize = 10;

/// Finds an optimal tour by enumerating every permutation.
///
/// # Examples
///
/// ```
/// use held_karp::models::Location;
/// use held_karp::distance::DistanceMatrix;
/// use held_karp::exact::brute_force;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(1, 0.0, 0.0),
///     Location::new(2, 0.0, 1.0),
///     Location::new(3, 1.0, 0.0),
///     Location::new(4, 1.0, 1.0),
/// ]);
/// let tour = brute_force(&dm).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.size();
    if n < 2 {
        return Err(Error::TooFewCities { cities: n });
    }
    if n > BRUTE_FORCE_MAX_CITIES {
        return Err(Error::TooManyCities {
            cities: n,
            max: BRUTE_FORCE_MAX_CITIES,
        });
    }
    distances.validate()?;

    let mut search = Search {
        distances,
        visited: vec![false; n],
        path: Vec::with_capacity(n + 1),
        best: None,
    };
    search.visited[0] = true;
    search.path.push(0);
    search.extend(0.0);

    let (cost, mut cities) = search
        .best
        .ok_or_else(|| Error::internal("permutation search found no tour"))?;
    cities.push(0);
    Ok(Tour::new(cities, cost))
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    visited: Vec<bool>,
    path: Vec<usize>,
    best: Option<(f64, Vec<usize>)>,
}

impl Search<'_> {
    fn extend(&mut self, cost: f64) {
        let n = self.visited.len();
        let last = self.path[self.path.len() - 1];
        if self.path.len() == n {
            let total = cost + self.distances.get(last, 0);
            if self.best.as_ref().map_or(true, |(best, _)| total < *best) {
                self.best = Some((total, self.path.clone()));
            }
            return;
        }
        for next in 1..n {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            self.extend(cost + self.distances.get(last, next));
            self.path.pop();
            self.visited[next] = false;
        }
    }
}
