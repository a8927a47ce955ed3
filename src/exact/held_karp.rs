//! Held-Karp exact TSP solver.
//!
//! # Algorithm
//!
//! For every set `S` of non-origin cities and every `j ∈ S`, `C(S, j)` is the
//! cheapest path that leaves city 0, visits exactly `S`, and ends at `j`:
//!
//! ```text
//! C({j}, j) = d(0, j)
//! C(S, j)   = min over p ∈ S \ {j} of C(S \ {j}, p) + d(p, j)
//! tour      = min over j of C(full, j) + d(j, 0)
//! ```
//!
//! States are filled bottom-up by set size. All states of size `k - 1` are
//! stored before any state of size `k` is computed, so every lookup hits.
//! Ties go to the first candidate in enumeration order.
//!
//! # Complexity
//!
//! O(n² · 2ⁿ) time, O(n · 2ⁿ) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of SIAM* 10(1), 196-210.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::memo::{MemoTable, StateKey};
use crate::models::Tour;
use crate::subset::{binomial, rotations, subsets_of_size, CitySet};

use super::config::HeldKarpConfig;
use super::reconstruct::reconstruct_tour;

/// Bookkeeping from one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of cities in the instance.
    pub cities: usize,
    /// States stored in the memo table, terminal state included.
    pub states: usize,
    /// Final memo table capacity.
    pub capacity: usize,
    /// How many times the memo table doubled.
    pub resizes: usize,
}

/// Exact solver over a validated distance matrix. City 0 is the origin.
///
/// # Examples
///
/// ```
/// use held_karp::models::Location;
/// use held_karp::distance::DistanceMatrix;
/// use held_karp::exact::HeldKarp;
///
/// let locations = vec![
///     Location::new(1, 0.0, 0.0),
///     Location::new(2, 0.0, 1.0),
///     Location::new(3, 1.0, 0.0),
///     Location::new(4, 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
///
/// let tour = HeldKarp::new(&dm).unwrap().solve().unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(tour.cities().first(), Some(&0));
/// assert_eq!(tour.cities().last(), Some(&0));
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarp<'a> {
    distances: &'a DistanceMatrix,
    config: HeldKarpConfig,
    universe: Vec<usize>,
}

impl<'a> HeldKarp<'a> {
    /// Creates a solver with the default configuration.
    pub fn new(distances: &'a DistanceMatrix) -> Result<Self> {
        Self::with_config(distances, HeldKarpConfig::default())
    }

    /// Creates a solver, rejecting inputs it cannot or should not solve.
    ///
    /// Fails with [`Error::TooFewCities`] below two cities,
    /// [`Error::TooManyCities`] above the configured bound, and
    /// [`Error::InvalidDistance`] for negative or non-finite off-diagonal
    /// entries.
    pub fn with_config(distances: &'a DistanceMatrix, config: HeldKarpConfig) -> Result<Self> {
        config.validate()?;
        let n = distances.size();
        if n < 2 {
            return Err(Error::TooFewCities { cities: n });
        }
        if n > config.max_cities() {
            return Err(Error::TooManyCities {
                cities: n,
                max: config.max_cities(),
            });
        }
        distances.validate()?;
        Ok(Self {
            distances,
            config,
            universe: (1..n).collect(),
        })
    }

    /// Number of cities in the instance.
    pub fn num_cities(&self) -> usize {
        self.distances.size()
    }

    /// Computes an optimal tour.
    pub fn solve(&self) -> Result<Tour> {
        self.solve_with_stats().map(|(tour, _)| tour)
    }

    /// Computes an optimal tour and reports memo table usage.
    pub fn solve_with_stats(&self) -> Result<(Tour, SolveStats)> {
        let n = self.num_cities();
        let mut table = match self.config.initial_capacity() {
            Some(capacity) => MemoTable::with_capacity(capacity)?,
            None => MemoTable::for_cities(n)?,
        };
        log::info!(
            "held_karp.solve: start n={n} capacity={}",
            table.capacity()
        );

        self.seed(&mut table)?;
        for k in 2..n {
            self.extend(&mut table, k)?;
        }
        let terminal = self.close(&mut table)?;
        let tour = reconstruct_tour(&table, terminal)?;

        let stats = SolveStats {
            cities: n,
            states: table.len(),
            capacity: table.capacity(),
            resizes: table.resizes(),
        };
        log::info!(
            "held_karp.solve: done n={n} cost={:.6} states={} resizes={}",
            tour.cost(),
            stats.states,
            stats.resizes
        );
        Ok((tour, stats))
    }

    /// Size-1 states: straight from the origin.
    fn seed(&self, table: &mut MemoTable) -> Result<()> {
        for &city in &self.universe {
            let key = StateKey::new(CitySet::singleton(city), city);
            insert_new(table, key, self.distances.get(0, city), 0)?;
        }
        log::debug!("held_karp.phase: k=1 states={}", table.len());
        Ok(())
    }

    /// Size-`k` states from the size-`k - 1` states already stored.
    fn extend(&self, table: &mut MemoTable, k: usize) -> Result<()> {
        let mut candidates = Vec::with_capacity(k);
        for subset in subsets_of_size(&self.universe, k) {
            for dest in subset {
                let prior = subset.without(dest);
                candidates.clear();
                candidates.extend(prior);
                let (cost, pred) = self.best_predecessor(table, prior, &candidates, dest)?;
                insert_new(table, StateKey::new(subset, dest), cost, pred)?;
            }
        }
        log::debug!(
            "held_karp.phase: k={k} subsets={} states={}",
            binomial(self.universe.len(), k),
            table.len()
        );
        Ok(())
    }

    /// Closes the tour: city 0 is the destination over the full set.
    fn close(&self, table: &mut MemoTable) -> Result<StateKey> {
        let full = CitySet::non_origin(self.num_cities());
        let (cost, last) = self.best_predecessor(table, full, &self.universe, 0)?;
        let terminal = StateKey::new(full, 0);
        insert_new(table, terminal, cost, last)?;
        log::debug!("held_karp.close: last={last} cost={cost:.6}");
        Ok(terminal)
    }

    /// Cheapest way to reach `dest` after visiting exactly `prior`, ending the
    /// prior path at one of `candidates` (the cities of `prior`, ascending).
    ///
    /// Each rotation of `candidates` names one predecessor as its front
    /// element; only a strictly cheaper candidate replaces the current best.
    fn best_predecessor(
        &self,
        table: &MemoTable,
        prior: CitySet,
        candidates: &[usize],
        dest: usize,
    ) -> Result<(f64, usize)> {
        let mut best: Option<(f64, usize)> = None;
        for rotation in rotations(candidates) {
            let pred = rotation.first();
            let entry = table.entry(&StateKey::new(prior, pred))?;
            let cost = entry.cost() + self.distances.get(pred, dest);
            if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                best = Some((cost, pred));
            }
        }
        best.ok_or_else(|| Error::internal(format!("no predecessor for city {dest} from {prior}")))
    }
}

/// Stores a state that must not exist yet. A rejected write leaves the table
/// untouched.
fn insert_new(table: &mut MemoTable, key: StateKey, cost: f64, pred: usize) -> Result<()> {
    if table.contains_key(&key) {
        return Err(Error::DuplicateState {
            visited: key.visited().bits(),
            city: key.city(),
        });
    }
    table.put(key, cost, pred)?;
    Ok(())
}

/// Solves `distances` with the default configuration.
///
/// # Examples
///
/// ```
/// use held_karp::distance::DistanceMatrix;
/// use held_karp::exact::held_karp;
///
/// let mut dm = DistanceMatrix::new(2);
/// dm.set(0, 1, 3.0);
/// dm.set(1, 0, 3.0);
/// let tour = held_karp(&dm).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 0]);
/// assert!((tour.cost() - 6.0).abs() < 1e-10);
/// ```
pub fn held_karp(distances: &DistanceMatrix) -> Result<Tour> {
    HeldKarp::new(distances)?.solve()
}
