//! City type.

use serde::{Deserialize, Serialize};

/// A city in a TSP instance: an identifier plus planar coordinates.
///
/// City ids are 0-based and contiguous within an instance; city 0 is the
/// fixed origin of every tour. Cities are immutable after creation — the
/// solvers never touch them, only the distance matrix derived from them.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::City;
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City identifier (index into the distance matrix).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
