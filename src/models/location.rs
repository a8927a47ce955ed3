//! Located point type.

use serde::{Deserialize, Serialize};

/// A city location with planar coordinates.
///
/// The `id` is the label carried by the input file; solvers address cities
/// by their position in the location list, not by this label.
///
/// # Examples
///
/// ```
/// use held_karp::models::Location;
///
/// let a = Location::new(1, 0.0, 0.0);
/// let b = Location::new(2, 3.0, 4.0);
/// assert_eq!(b.id(), 2);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Label from the input.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
