//! Greedy nearest-neighbor tour and neighbor ordering.
//!
//! Both are preparation steps for the parallel solver: the greedy tour
//! seeds the shared incumbent with a finite bound, and the per-city
//! neighbor order makes each branch try its shortest edges first so the
//! pruning rule fires as early as possible.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Builds one nearest-neighbor closed tour from city 0.
///
/// Always moves to the nearest unvisited city, then closes back to the
/// origin. The result is a feasible tour, so its cost is an upper bound
/// on the optimum — a warm start for pruning, never a change to the
/// final answer.
///
/// # Arguments
///
/// * `distances` — A validated distance matrix with at least one city
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::solver::greedy_tour;
///
/// let dm = DistanceMatrix::from_data(
///     3,
///     vec![0.0, 1.0, 4.0, 1.0, 0.0, 2.0, 4.0, 2.0, 0.0],
/// )
/// .unwrap();
/// let tour = greedy_tour(&dm);
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// assert!((tour.cost() - 7.0).abs() < 1e-10);
/// ```
pub fn greedy_tour(distances: &DistanceMatrix) -> Tour {
    let n = distances.size();
    if n == 1 {
        return Tour::trivial();
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut order = Vec::with_capacity(n);
    order.push(0);

    let mut current = 0;
    let mut cost = 0.0;

    while order.len() < n {
        let mut next = None;
        let mut min_dist = f64::INFINITY;
        for candidate in 1..n {
            if !visited[candidate] && distances.get(current, candidate) < min_dist {
                min_dist = distances.get(current, candidate);
                next = Some(candidate);
            }
        }
        // Some unvisited city always remains here, and all entries are finite.
        let next = next.expect("unvisited city must exist");
        visited[next] = true;
        order.push(next);
        cost += min_dist;
        current = next;
    }

    cost += distances.get(current, 0);
    Tour::new(order, cost)
}

/// Precomputes, for every city, all other cities sorted by ascending
/// distance from it.
///
/// Search branches consult this order instead of ascending index order,
/// so the most promising extensions are tried first.
pub fn sorted_neighbors(distances: &DistanceMatrix) -> Vec<Vec<usize>> {
    let n = distances.size();
    (0..n)
        .map(|i| {
            let mut neighbors: Vec<usize> = (0..n).filter(|&j| j != i).collect();
            neighbors.sort_by(|&a, &b| {
                distances
                    .get(i, a)
                    .partial_cmp(&distances.get(i, b))
                    .expect("distance should not be NaN")
            });
            neighbors
        })
        .collect()
}
