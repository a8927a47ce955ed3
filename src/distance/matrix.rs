//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// The diagonal holds `f64::INFINITY` by convention, so a city can never be
/// its own cheapest predecessor. Off-diagonal entries are non-negative and
/// finite once [`validate`](Self::validate) succeeds; they need not be
/// symmetric.
///
/// # Examples
///
/// ```
/// use held_karp::models::Location;
/// use held_karp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new(1, 0.0, 0.0),
///     Location::new(2, 3.0, 4.0),
///     Location::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(dm.get(1, 1).is_infinite());
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with zero off-diagonal entries and
    /// an infinite diagonal.
    pub fn new(size: usize) -> Self {
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            data[i * size + i] = f64::INFINITY;
        }
        Self { data, size }
    }

    /// Computes a Euclidean distance matrix from locations, in list order.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Entries are taken as given, diagonal included.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::InvalidDataLength {
                size,
                len: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Fails with [`Error::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks that every off-diagonal entry is finite and non-negative.
    ///
    /// The diagonal is never read by the solvers and is not checked.
    pub fn validate(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                if from == to {
                    continue;
                }
                let value = self.get(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistance { from, to, value });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(1, 0.0, 0.0),
            Location::new(2, 3.0, 4.0),
            Location::new(3, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!(dm.get(0, 0).is_infinite());
        assert!(dm.validate().is_ok());
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_data(2, vec![inf, 5.0, 5.0, inf]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidDataLength { size: 2, len: 3 }));
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            Error::NotSquare {
                rows: 2,
                row: 1,
                len: 1
            }
        ));
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
        assert!(dm.get(2, 2).is_infinite());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
        assert!(dm.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(1, 2, -1.0);
        assert!(matches!(
            dm.validate(),
            Err(Error::InvalidDistance { from: 1, to: 2, .. })
        ));

        let mut dm = DistanceMatrix::new(3);
        dm.set(2, 0, f64::NAN);
        assert!(matches!(
            dm.validate(),
            Err(Error::InvalidDistance { from: 2, to: 0, .. })
        ));

        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, f64::INFINITY);
        assert!(dm.validate().is_err());
    }

    #[test]
    fn test_validate_ignores_diagonal() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, inf]).expect("valid");
        assert!(dm.validate().is_ok());
    }
}
