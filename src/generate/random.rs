//! Random instance generation.

use rand::Rng;

use crate::models::City;

/// Generates `count` cities with coordinates uniform in `[0, canvas)`.
///
/// Ids are assigned `0..count` in generation order, so city 0 — the tour
/// origin — is always present. The RNG is caller-supplied: reproducibility
/// is the caller's seed, never process-global state.
///
/// Returns an empty vector for `count == 0`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use tsp_exact::generate::random_cities;
///
/// let mut rng = StdRng::seed_from_u64(1234);
/// let cities = random_cities(5, 1000.0, &mut rng);
/// assert_eq!(cities.len(), 5);
/// assert_eq!(cities[0].id(), 0);
/// ```
pub fn random_cities<R: Rng>(count: usize, canvas: f64, rng: &mut R) -> Vec<City> {
    (0..count)
        .map(|id| {
            let x = rng.random_range(0.0..canvas);
            let y = rng.random_range(0.0..canvas);
            City::new(id, x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ids_are_contiguous() {
        let mut rng = StdRng::seed_from_u64(7);
        let cities = random_cities(10, 1000.0, &mut rng);
        for (i, city) in cities.iter().enumerate() {
            assert_eq!(city.id(), i);
        }
    }

    #[test]
    fn test_coordinates_within_canvas() {
        let mut rng = StdRng::seed_from_u64(7);
        for city in random_cities(50, 100.0, &mut rng) {
            assert!(city.x() >= 0.0 && city.x() < 100.0);
            assert!(city.y() >= 0.0 && city.y() < 100.0);
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let a = random_cities(8, 1000.0, &mut StdRng::seed_from_u64(1234));
        let b = random_cities(8, 1000.0, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_cities(0, 1000.0, &mut rng).is_empty());
    }
}
