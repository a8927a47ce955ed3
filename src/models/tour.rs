//! Closed tour type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

/// A closed tour that starts and ends at city 0, paired with its cost.
///
/// `cities` holds the full closed sequence, so a tour over `n` cities has
/// `n + 1` entries with city 0 at both ends.
///
/// # Examples
///
/// ```
/// use held_karp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12.5);
/// assert_eq!(tour.num_cities(), 3);
/// assert_eq!(tour.interior(), &[2, 1]);
/// assert_eq!(tour.to_string(), "0 -> 2 -> 1 -> 0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a closed city sequence and its cost.
    pub fn new(cities: Vec<usize>, cost: f64) -> Self {
        Self { cities, cost }
    }

    /// The closed city sequence, origin included at both ends.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Cities visited between leaving and re-entering the origin.
    pub fn interior(&self) -> &[usize] {
        match self.cities.len() {
            0..=2 => &[],
            len => &self.cities[1..len - 1],
        }
    }

    /// Total cost reported by the solver.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of distinct cities on the tour (origin counted once).
    pub fn num_cities(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Recomputes the tour length edge by edge from a distance matrix.
    pub fn length_in(&self, distances: &DistanceMatrix) -> f64 {
        self.cities
            .windows(2)
            .map(|w| distances.get(w[0], w[1]))
            .sum()
    }

    /// Returns `true` if this is a closed tour from 0 that visits each of the
    /// `n` cities exactly once.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.cities.len() != n + 1 || self.cities.first() != Some(&0) {
            return false;
        }
        if self.cities.last() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        for &c in &self.cities[..n] {
            if c >= n || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{city}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![f64::INFINITY, 1.0, 1.0, 2f64.sqrt()],
            vec![1.0, f64::INFINITY, 2f64.sqrt(), 1.0],
            vec![1.0, 2f64.sqrt(), f64::INFINITY, 1.0],
            vec![2f64.sqrt(), 1.0, 1.0, f64::INFINITY],
        ])
        .expect("square")
    }

    #[test]
    fn test_tour_accessors() {
        let t = Tour::new(vec![0, 1, 3, 2, 0], 4.0);
        assert_eq!(t.cities(), &[0, 1, 3, 2, 0]);
        assert_eq!(t.interior(), &[1, 3, 2]);
        assert_eq!(t.num_cities(), 4);
        assert_eq!(t.cost(), 4.0);
    }

    #[test]
    fn test_tour_length_in() {
        let t = Tour::new(vec![0, 1, 3, 2, 0], 4.0);
        assert!((t.length_in(&unit_square()) - 4.0).abs() < 1e-10);

        let crossing = Tour::new(vec![0, 3, 1, 2, 0], 0.0);
        let expected = 2.0 * 2f64.sqrt() + 2.0;
        assert!((crossing.length_in(&unit_square()) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_tour_validity() {
        assert!(Tour::new(vec![0, 1, 0], 2.0).is_valid_for(2));
        assert!(Tour::new(vec![0, 2, 1, 3, 0], 0.0).is_valid_for(4));
        // Repeated city
        assert!(!Tour::new(vec![0, 1, 1, 3, 0], 0.0).is_valid_for(4));
        // Wrong length
        assert!(!Tour::new(vec![0, 1, 2, 0], 0.0).is_valid_for(4));
        // Not closed at origin
        assert!(!Tour::new(vec![0, 1, 2, 3, 1], 0.0).is_valid_for(4));
        // Out of range
        assert!(!Tour::new(vec![0, 5, 2, 3, 0], 0.0).is_valid_for(4));
    }

    #[test]
    fn test_tour_display() {
        let t = Tour::new(vec![0, 1, 0], 2.0);
        assert_eq!(t.to_string(), "0 -> 1 -> 0");
        assert_eq!(Tour::new(vec![], 0.0).to_string(), "");
    }

    #[test]
    fn test_tour_interior_degenerate() {
        assert!(Tour::new(vec![0, 0], 0.0).interior().is_empty());
        assert!(Tour::new(vec![], 0.0).interior().is_empty());
    }

    #[test]
    fn test_tour_serde() {
        let t = Tour::new(vec![0, 2, 1, 0], 3.5);
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, r#"{"cities":[0,2,1,0],"cost":3.5}"#);
        let back: Tour = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, t);
    }
}
