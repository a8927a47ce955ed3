//! Fixed-size subset enumeration.
//!
//! # Algorithm
//!
//! Keeps an ascending array of `k` positions into the universe. Each step
//! emits the cities at those positions, then advances the rightmost position
//! that still has room and resets everything after it to consecutive values.
//! This visits subsets in lexicographic order of positions, which is the
//! order a depth-first "choose k of n" recursion produces, without the
//! recursion or a shared accumulator.
//!
//! # Complexity
//!
//! O(k) amortized per subset, C(m, k) subsets for a universe of size m.

use super::CitySet;

/// Iterator over every `k`-city subset of a universe.
///
/// The universe is taken in the order given; subsets come out in
/// lexicographic order of universe positions, and repeated enumerations of
/// the same universe yield the same sequence.
///
/// # Examples
///
/// ```
/// use held_karp::subset::subsets_of_size;
///
/// let subsets: Vec<Vec<usize>> = subsets_of_size(&[1, 2, 3, 4], 2)
///     .map(|s| s.iter().collect())
///     .collect();
/// assert_eq!(
///     subsets,
///     vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Subsets<'a> {
    universe: &'a [usize],
    positions: Vec<usize>,
    done: bool,
}

impl<'a> Subsets<'a> {
    /// Creates an enumerator over `k`-subsets of `universe`.
    ///
    /// Yields nothing when `k` exceeds the universe size, and exactly the
    /// empty set when `k == 0`.
    pub fn new(universe: &'a [usize], k: usize) -> Self {
        Self {
            universe,
            positions: (0..k).collect(),
            done: k > universe.len(),
        }
    }

    fn advance(&mut self) {
        let n = self.universe.len();
        let k = self.positions.len();
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < n - k + i) else {
            self.done = true;
            return;
        };
        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
    }
}

impl Iterator for Subsets<'_> {
    type Item = CitySet;

    fn next(&mut self) -> Option<CitySet> {
        if self.done {
            return None;
        }
        let subset = self.positions.iter().map(|&p| self.universe[p]).collect();
        self.advance();
        Some(subset)
    }
}

/// Enumerates every `k`-city subset of `universe` in canonical order.
pub fn subsets_of_size(universe: &[usize], k: usize) -> Subsets<'_> {
    Subsets::new(universe, k)
}

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use held_karp::subset::binomial;
///
/// assert_eq!(binomial(5, 2), 10);
/// assert_eq!(binomial(3, 5), 0);
/// ```
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step.
        acc = match acc.checked_mul((n - i) as u64) {
            Some(v) => v / (i as u64 + 1),
            None => return u64::MAX,
        };
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect(universe: &[usize], k: usize) -> Vec<Vec<usize>> {
        subsets_of_size(universe, k)
            .map(|s| s.iter().collect())
            .collect()
    }

    #[test]
    fn test_counts_match_binomial() {
        let universe: Vec<usize> = (1..9).collect();
        for k in 0..=universe.len() + 1 {
            let n = subsets_of_size(&universe, k).count() as u64;
            assert_eq!(n, binomial(universe.len(), k), "k = {k}");
        }
    }

    #[test]
    fn test_ascending_and_unique() {
        let universe: Vec<usize> = (1..8).collect();
        let all = collect(&universe, 3);
        let mut seen = HashSet::new();
        for subset in &all {
            assert_eq!(subset.len(), 3);
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(subset.clone()), "duplicate {subset:?}");
        }
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            collect(&[1, 2, 3, 4], 3),
            vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]
        );
    }

    #[test]
    fn test_deterministic() {
        let universe = [1, 3, 5, 6, 9];
        assert_eq!(collect(&universe, 2), collect(&universe, 2));
    }

    #[test]
    fn test_edge_sizes() {
        assert_eq!(collect(&[1, 2, 3], 0), vec![Vec::<usize>::new()]);
        assert_eq!(collect(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
        assert!(collect(&[1, 2, 3], 4).is_empty());
        assert!(collect(&[], 1).is_empty());
        assert_eq!(collect(&[], 0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(6, 0), 1);
        assert_eq!(binomial(6, 3), 20);
        assert_eq!(binomial(31, 15), 300_540_195);
        assert_eq!(binomial(4, 5), 0);
    }
}
