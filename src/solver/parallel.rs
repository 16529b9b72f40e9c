//! Parallel branch-and-bound solver.
//!
//! # Algorithm
//!
//! Same pruning and base-case logic as the sequential solver, restructured
//! for concurrent exploration with a tighter starting bound:
//!
//! 1. A nearest-neighbor tour seeds the shared incumbent, so pruning has a
//!    finite bound from the first recursive call.
//! 2. Every city gets a precomputed candidate order by ascending distance,
//!    so branches extend along short edges first.
//! 3. One branch is launched per choice of second city: for each `c ≠ 0`
//!    a branch starts the tour as `[0, c]` and runs its entire subtree to
//!    completion on whichever worker picks it up.
//!
//! Branches share exactly one mutable value, the incumbent. Pruning reads
//! its cost lock-free on every call; improvements commit under a mutex
//! with a re-check after acquisition. All other state is branch-local.
//!
//! The call returns only after every branch has exhausted its subtree, so
//! the result carries the same exactness guarantee as the sequential
//! solver.

use rayon::prelude::*;

use crate::distance::{DistanceMatrix, MatrixError};
use crate::models::Tour;

use super::greedy::{greedy_tour, sorted_neighbors};
use super::incumbent::SharedIncumbent;

/// Solves the instance exactly with multi-branch parallel branch-and-bound.
///
/// Returns the optimal closed tour starting at city 0 — the same cost as
/// [`solve_sequential`](super::solve_sequential), though a different
/// optimal order may be reported under cost ties. Fails only on a
/// malformed matrix.
///
/// The fan-out is n−1 branches regardless of worker count; rayon
/// multiplexes them onto the available threads.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::solver::solve_parallel;
///
/// let dm = DistanceMatrix::from_data(
///     3,
///     vec![0.0, 1.0, 4.0, 1.0, 0.0, 2.0, 4.0, 2.0, 0.0],
/// )
/// .unwrap();
/// let tour = solve_parallel(&dm).unwrap();
/// assert!((tour.cost() - 7.0).abs() < 1e-10);
/// ```
pub fn solve_parallel(distances: &DistanceMatrix) -> Result<Tour, MatrixError> {
    distances.validate()?;
    let n = distances.size();
    if n == 1 {
        return Ok(Tour::trivial());
    }

    let incumbent = SharedIncumbent::new(greedy_tour(distances));
    let neighbors = sorted_neighbors(distances);

    (1..n).into_par_iter().for_each(|second| {
        let branch = Branch {
            distances,
            neighbors: &neighbors,
            incumbent: &incumbent,
        };

        let mut visited = vec![false; n];
        visited[0] = true;
        visited[second] = true;

        let mut route = Vec::with_capacity(n);
        route.push(0);
        route.push(second);

        branch.explore(second, distances.get(0, second), &mut visited, &mut route);
    });

    Ok(incumbent.into_tour())
}

/// The read-only context a branch carries through its recursion. The
/// mutable state (visited set, route buffer) stays on the branch's own
/// stack and follows push/pop discipline around each recursive call.
struct Branch<'a> {
    distances: &'a DistanceMatrix,
    neighbors: &'a [Vec<usize>],
    incumbent: &'a SharedIncumbent,
}

impl Branch<'_> {
    fn explore(&self, current: usize, cost: f64, visited: &mut [bool], route: &mut Vec<usize>) {
        // Prune against the latest committed bound from any branch.
        if cost >= self.incumbent.cost() {
            return;
        }

        if route.len() == self.distances.size() {
            let total = cost + self.distances.get(current, 0);
            self.incumbent.try_improve(total, route);
            return;
        }

        // Shortest edges first.
        for &next in &self.neighbors[current] {
            if !visited[next] {
                visited[next] = true;
                route.push(next);
                self.explore(next, cost + self.distances.get(current, next), visited, route);
                visited[next] = false;
                route.pop();
            }
        }
    }
}
