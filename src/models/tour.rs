//! Tour type.

use serde::{Deserialize, Serialize};

/// A closed tour: an ordered visiting sequence plus its total cost.
///
/// The order is a permutation of `0..n` starting at city 0. The closing
/// edge from the last city back to 0 is implied, not stored — its weight
/// is already included in `cost`.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1], 10.0);
/// assert_eq!(tour.len(), 3);
/// assert!(tour.is_valid_for(3));
/// assert!(!tour.is_valid_for(4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a visiting order and its closed-tour cost.
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// The trivial single-city tour: visit city 0, cost 0.
    pub fn trivial() -> Self {
        Self {
            order: vec![0],
            cost: 0.0,
        }
    }

    /// Visiting order, starting at city 0. The return edge is implied.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total closed-tour cost, including the implied return edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the order is a permutation of `0..n` starting at 0.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.order.len() != n || self.order.first() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}
