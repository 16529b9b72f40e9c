//! Benchmark harness driving both solvers.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::distance::{DistanceMatrix, MatrixError};
use crate::generate::random_cities;
use crate::solver::{solve_parallel, solve_sequential};

/// Configuration for a benchmark run.
///
/// The default mirrors the classic comparison setup: sizes 10/15/20/22,
/// five repetitions per size, and the sequential solver skipped above 16
/// cities, where exhaustive single-threaded search becomes impractical.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Instance sizes (number of cities) to measure.
    pub sizes: Vec<usize>,
    /// Repetitions per size; times are averaged over them.
    pub repetitions: usize,
    /// Largest size the sequential solver is still run at.
    pub sequential_limit: usize,
    /// Side length of the square the cities are sampled from.
    pub canvas: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 15, 20, 22],
            repetitions: 5,
            sequential_limit: 16,
            canvas: 1000.0,
        }
    }
}

/// Averaged measurements for one instance size.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Number of cities.
    pub num_cities: usize,
    /// Average sequential wall-clock time in milliseconds, `None` if the
    /// size exceeded the sequential limit.
    pub sequential_ms: Option<f64>,
    /// Average parallel wall-clock time in milliseconds.
    pub parallel_ms: f64,
    /// Sequential time over parallel time, `None` when sequential was
    /// skipped.
    pub speedup: Option<f64>,
    /// Best cost found by the parallel solver on the last repetition.
    pub best_cost: f64,
}

/// Runs both solvers over every configured size and repetition, timing
/// each call with wall-clock time.
///
/// Each repetition gets a fresh instance derived from `seed`, the size,
/// and the repetition index, so runs are reproducible while repetitions
/// still see distinct maps.
///
/// # Examples
///
/// ```
/// use tsp_exact::benchmark::{run_benchmarks, BenchmarkConfig};
///
/// let config = BenchmarkConfig {
///     sizes: vec![5, 6],
///     repetitions: 2,
///     ..BenchmarkConfig::default()
/// };
/// let results = run_benchmarks(&config, 1234).unwrap();
/// assert_eq!(results.len(), 2);
/// assert!(results[0].sequential_ms.is_some());
/// ```
pub fn run_benchmarks(
    config: &BenchmarkConfig,
    seed: u64,
) -> Result<Vec<ScenarioResult>, MatrixError> {
    let mut results = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let skip_sequential = n > config.sequential_limit;
        let mut seq_times = Vec::new();
        let mut par_times = Vec::new();
        let mut best_cost = 0.0;

        for rep in 0..config.repetitions {
            let instance_seed = seed
                .wrapping_add((n as u64) << 32)
                .wrapping_add(rep as u64);
            let mut rng = StdRng::seed_from_u64(instance_seed);
            let cities = random_cities(n, config.canvas, &mut rng);
            let dm = DistanceMatrix::from_cities(&cities);

            if !skip_sequential {
                let start = Instant::now();
                solve_sequential(&dm)?;
                seq_times.push(start.elapsed().as_secs_f64() * 1000.0);
            }

            let start = Instant::now();
            let tour = solve_parallel(&dm)?;
            par_times.push(start.elapsed().as_secs_f64() * 1000.0);
            best_cost = tour.cost();
        }

        let parallel_ms = average(&par_times);
        let sequential_ms = if skip_sequential {
            None
        } else {
            Some(average(&seq_times))
        };
        let speedup = match sequential_ms {
            Some(seq) if parallel_ms > 0.0 => Some(seq / parallel_ms),
            _ => None,
        };

        results.push(ScenarioResult {
            num_cities: n,
            sequential_ms,
            parallel_ms,
            speedup,
            best_cost,
        });
    }

    Ok(results)
}

fn average(times: &[f64]) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    times.iter().sum::<f64>() / times.len() as f64
}
