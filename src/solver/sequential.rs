//! Sequential branch-and-bound solver.
//!
//! # Algorithm
//!
//! Depth-first recursive backtracking from city 0. A branch is abandoned
//! as soon as its accumulated cost reaches the best complete tour found
//! so far (a tie cannot improve, so the cut is strict). When all cities
//! are on the partial route, the closing edge back to 0 completes the
//! tour and the incumbent is replaced on strict improvement only.
//!
//! Candidates are tried in ascending index order; the partial route and
//! visited set are single buffers mutated and restored around each
//! recursive call, never copied.
//!
//! # Complexity
//!
//! Exponential in n (exhaustive modulo pruning). Exact: always terminates
//! with the optimal tour. Practical ceiling around 13–17 cities — bounding
//! n is the caller's responsibility.

use crate::distance::{DistanceMatrix, MatrixError};
use crate::models::Tour;

/// Solves the instance exactly with single-threaded branch-and-bound.
///
/// Returns the optimal closed tour starting at city 0. Deterministic for
/// a given matrix. Fails only on a malformed matrix (see
/// [`DistanceMatrix::validate`]).
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::solver::solve_sequential;
///
/// let dm = DistanceMatrix::from_data(
///     3,
///     vec![0.0, 1.0, 4.0, 1.0, 0.0, 2.0, 4.0, 2.0, 0.0],
/// )
/// .unwrap();
/// let tour = solve_sequential(&dm).unwrap();
/// assert!((tour.cost() - 7.0).abs() < 1e-10);
/// assert_eq!(tour.order()[0], 0);
/// ```
pub fn solve_sequential(distances: &DistanceMatrix) -> Result<Tour, MatrixError> {
    distances.validate()?;
    let n = distances.size();
    if n == 1 {
        return Ok(Tour::trivial());
    }

    let mut search = Search {
        distances,
        visited: vec![false; n],
        route: Vec::with_capacity(n),
        best_cost: f64::INFINITY,
        best_order: Vec::new(),
    };
    search.visited[0] = true;
    search.route.push(0);
    search.explore(0, 0.0);

    Ok(Tour::new(search.best_order, search.best_cost))
}

/// Branch-local search state: the partial route built so far, the visited
/// set, and the incumbent. The route and visited set follow strict stack
/// discipline — push before recursing, pop on return.
struct Search<'a> {
    distances: &'a DistanceMatrix,
    visited: Vec<bool>,
    route: Vec<usize>,
    best_cost: f64,
    best_order: Vec<usize>,
}

impl Search<'_> {
    fn explore(&mut self, current: usize, cost: f64) {
        // Prune: this partial route can no longer beat the incumbent.
        if cost >= self.best_cost {
            return;
        }

        let n = self.distances.size();
        if self.route.len() == n {
            let total = cost + self.distances.get(current, 0);
            if total < self.best_cost {
                self.best_cost = total;
                self.best_order.clear();
                self.best_order.extend_from_slice(&self.route);
            }
            return;
        }

        for next in 0..n {
            if !self.visited[next] {
                self.visited[next] = true;
                self.route.push(next);
                self.explore(next, cost + self.distances.get(current, next));
                self.visited[next] = false;
                self.route.pop();
            }
        }
    }
}
