//! Exact branch-and-bound TSP solvers.
//!
//! - [`solve_sequential`] — Single-threaded depth-first baseline, O(n!) worst case
//! - [`solve_parallel`] — One branch per second-city choice racing on a shared incumbent
//! - [`greedy_tour`] — Nearest-neighbor warm-start bound, O(n²)
//! - [`sorted_neighbors`] — Per-city candidate order by ascending distance, O(n² log n)
//!
//! Both solvers take a validated [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and return the optimal closed tour starting at city 0. Their costs
//! always agree; only the reported order may differ under cost ties.

mod greedy;
mod incumbent;
mod parallel;
mod sequential;

pub use greedy::{greedy_tour, sorted_neighbors};
pub use parallel::solve_parallel;
pub use sequential::solve_sequential;

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::distance::DistanceMatrix;
    use crate::models::City;

    use super::{greedy_tour, solve_parallel, solve_sequential};

    fn arb_cities() -> impl Strategy<Value = Vec<City>> {
        prop::collection::vec((0.0..1000.0f64, 0.0..1000.0f64), 1..=7).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| City::new(i, x, y))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_parallel_matches_sequential(cities in arb_cities()) {
            let dm = DistanceMatrix::from_cities(&cities);
            let seq = solve_sequential(&dm).unwrap();
            let par = solve_parallel(&dm).unwrap();
            prop_assert!((seq.cost() - par.cost()).abs() < 1e-9);
        }

        #[test]
        fn prop_returned_tour_is_consistent(cities in arb_cities()) {
            let n = cities.len();
            let dm = DistanceMatrix::from_cities(&cities);
            let tour = solve_parallel(&dm).unwrap();
            prop_assert!(tour.is_valid_for(n));
            prop_assert!((dm.tour_cost(tour.order()) - tour.cost()).abs() < 1e-9);
        }

        #[test]
        fn prop_greedy_bounds_the_optimum(cities in arb_cities()) {
            let dm = DistanceMatrix::from_cities(&cities);
            let greedy = greedy_tour(&dm);
            let optimal = solve_sequential(&dm).unwrap();
            prop_assert!(greedy.cost() >= optimal.cost() - 1e-9);
        }

        #[test]
        fn prop_scaling_scales_the_cost(cities in arb_cities(), k in 0.1..10.0f64) {
            let n = cities.len();
            let dm = DistanceMatrix::from_cities(&cities);
            let base = solve_sequential(&dm).unwrap();

            let mut scaled = DistanceMatrix::new(n);
            for i in 0..n {
                for j in 0..n {
                    scaled.set(i, j, dm.get(i, j) * k);
                }
            }
            let tour = solve_sequential(&scaled).unwrap();
            prop_assert!((tour.cost() - base.cost() * k).abs() < 1e-6 * k.max(1.0));
        }
    }
}
