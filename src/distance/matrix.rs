//! Dense distance matrix.

use crate::models::City;

use super::MatrixError;

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports both Euclidean distance computation from city coordinates and
/// explicit distance specification. The solvers consume it read-only and
/// require it to pass [`validate`](DistanceMatrix::validate) first:
/// square by construction, non-negative finite entries, zero diagonal,
/// symmetric.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::City;
/// use tsp_exact::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    ///
    /// The result is symmetric with a zero diagonal by construction.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
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

    /// Computes the closed-tour cost of a visiting order.
    ///
    /// Sums the edges between consecutive cities plus the implied closing
    /// edge from the last city back to the first. A single-city order
    /// costs zero.
    pub fn tour_cost(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let mut cost = 0.0;
        for w in order.windows(2) {
            cost += self.get(w[0], w[1]);
        }
        cost + self.get(order[order.len() - 1], order[0])
    }

    /// Checks the solver preconditions, rejecting malformed instances
    /// before any search begins.
    ///
    /// Requires at least one city, finite non-negative entries, a zero
    /// diagonal, and exact symmetry.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.size == 0 {
            return Err(MatrixError::Empty);
        }
        for i in 0..self.size {
            if self.get(i, i) != 0.0 {
                return Err(MatrixError::NonZeroDiagonal { index: i });
            }
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() {
                    return Err(MatrixError::NonFiniteDistance { from: i, to: j });
                }
                if d < 0.0 {
                    return Err(MatrixError::NegativeDistance {
                        from: i,
                        to: j,
                        distance: d,
                    });
                }
                if j > i && d != self.get(j, i) {
                    return Err(MatrixError::Asymmetric { from: i, to: j });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 3.0, 4.0),
            City::new(2, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_tour_cost_closes_the_loop() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 4.0, 1.0, 0.0, 2.0, 4.0, 2.0, 0.0])
            .expect("valid");
        // 0→1 + 1→2 + 2→0 = 1 + 2 + 4
        assert!((dm.tour_cost(&[0, 1, 2]) - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_single_city() {
        let dm = DistanceMatrix::new(1);
        assert_eq!(dm.tour_cost(&[0]), 0.0);
    }

    #[test]
    fn test_validate_accepts_euclidean() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert!(dm.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(dm.validate(), Err(MatrixError::Empty));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, -1.0);
        dm.set(1, 0, -1.0);
        assert!(matches!(
            dm.validate(),
            Err(MatrixError::NegativeDistance { from: 0, to: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_asymmetric() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert_eq!(dm.validate(), Err(MatrixError::Asymmetric { from: 0, to: 1 }));
    }

    #[test]
    fn test_validate_rejects_nonzero_diagonal() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(1, 1, 3.0);
        assert_eq!(dm.validate(), Err(MatrixError::NonZeroDiagonal { index: 1 }));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, f64::NAN);
        assert!(matches!(
            dm.validate(),
            Err(MatrixError::NonFiniteDistance { from: 0, to: 1 })
        ));
    }
}
