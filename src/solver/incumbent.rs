//! The shared incumbent raced on by parallel search branches.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::models::Tour;

/// The best complete tour found so far, shared across all search branches.
///
/// Cost and order are one composite value: both are replaced together
/// under the mutex, never observably mixed from two different updates.
/// The cost additionally lives in an atomic mirror (as `f64` bits) so the
/// hot-path pruning read never touches the lock. The mirror is only ever
/// stored while the mutex is held, so a branch that reads some cost `c`
/// is guaranteed a tour of cost ≤ `c` has already been committed.
///
/// Updates follow the double-checked pattern: a cheap optimistic read
/// first, then a mandatory re-check after acquiring the lock, because the
/// bound may have improved in between.
pub(crate) struct SharedIncumbent {
    cost_bits: AtomicU64,
    best: Mutex<Best>,
}

struct Best {
    cost: f64,
    order: Vec<usize>,
}

impl SharedIncumbent {
    /// Seeds the incumbent with a feasible starting tour.
    ///
    /// Seeding with a real tour (not just a bare cost) keeps cost and
    /// order consistent even if no branch ever improves on the seed.
    pub(crate) fn new(seed: Tour) -> Self {
        Self {
            cost_bits: AtomicU64::new(seed.cost().to_bits()),
            best: Mutex::new(Best {
                cost: seed.cost(),
                order: seed.order().to_vec(),
            }),
        }
    }

    /// The most recently committed best cost.
    ///
    /// Lock-free; called on every recursive step of every branch.
    pub(crate) fn cost(&self) -> f64 {
        f64::from_bits(self.cost_bits.load(Ordering::Acquire))
    }

    /// Installs `(cost, order)` as the new incumbent if it is a strict
    /// improvement. Returns `true` if the update was committed.
    pub(crate) fn try_improve(&self, cost: f64, order: &[usize]) -> bool {
        // Optimistic check before paying for the lock.
        if cost >= self.cost() {
            return false;
        }
        let mut best = self.best.lock().expect("incumbent lock poisoned");
        // Another branch may have improved the bound since the read above.
        if cost >= best.cost {
            return false;
        }
        best.cost = cost;
        best.order.clear();
        best.order.extend_from_slice(order);
        self.cost_bits.store(cost.to_bits(), Ordering::Release);
        true
    }

    /// Consumes the incumbent, yielding the final best tour.
    pub(crate) fn into_tour(self) -> Tour {
        let best = self
            .best
            .into_inner()
            .expect("incumbent lock poisoned");
        Tour::new(best.order, best.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_returned_when_never_improved() {
        let incumbent = SharedIncumbent::new(Tour::new(vec![0, 1, 2], 10.0));
        assert_eq!(incumbent.cost(), 10.0);
        let tour = incumbent.into_tour();
        assert_eq!(tour.order(), &[0, 1, 2]);
        assert_eq!(tour.cost(), 10.0);
    }

    #[test]
    fn test_strict_improvement_only() {
        let incumbent = SharedIncumbent::new(Tour::new(vec![0, 1, 2], 10.0));
        assert!(!incumbent.try_improve(10.0, &[0, 2, 1]));
        assert!(!incumbent.try_improve(11.0, &[0, 2, 1]));
        assert!(incumbent.try_improve(9.0, &[0, 2, 1]));
        assert_eq!(incumbent.cost(), 9.0);
    }

    #[test]
    fn test_cost_and_order_replaced_together() {
        let incumbent = SharedIncumbent::new(Tour::new(vec![0, 1, 2], 10.0));
        incumbent.try_improve(8.0, &[0, 2, 1]);
        let tour = incumbent.into_tour();
        assert_eq!(tour.cost(), 8.0);
        assert_eq!(tour.order(), &[0, 2, 1]);
    }

    #[test]
    fn test_concurrent_improvements_never_tear() {
        // Many threads race distinct (cost, order) pairs where the order
        // encodes the cost; the winner must be a matching pair.
        let incumbent = SharedIncumbent::new(Tour::new(vec![0, 0], 1000.0));
        std::thread::scope(|scope| {
            for t in 0..8usize {
                let incumbent = &incumbent;
                scope.spawn(move || {
                    for i in 0..100 {
                        let cost = (t * 100 + i) as f64;
                        incumbent.try_improve(cost, &[0, t * 100 + i]);
                    }
                });
            }
        });
        let tour = incumbent.into_tour();
        assert_eq!(tour.cost(), 0.0);
        assert_eq!(tour.order(), &[0, 0]);
    }
}
