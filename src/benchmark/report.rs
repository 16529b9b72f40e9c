//! CSV rendering of benchmark results.

use super::ScenarioResult;

/// Renders benchmark results as CSV: a header line plus one row per size.
///
/// Skipped sequential measurements render as empty fields.
///
/// # Examples
///
/// ```
/// use tsp_exact::benchmark::{to_csv, ScenarioResult};
///
/// let rows = vec![ScenarioResult {
///     num_cities: 10,
///     sequential_ms: Some(12.5),
///     parallel_ms: 5.0,
///     speedup: Some(2.5),
///     best_cost: 3141.59,
/// }];
/// let csv = to_csv(&rows);
/// assert!(csv.starts_with("num_cities,sequential_ms,parallel_ms,speedup,best_cost\n"));
/// assert!(csv.contains("10,12.500,5.000,2.50,3141.5900"));
/// ```
pub fn to_csv(results: &[ScenarioResult]) -> String {
    let mut out = String::from("num_cities,sequential_ms,parallel_ms,speedup,best_cost\n");
    for row in results {
        let sequential = row
            .sequential_ms
            .map(|ms| format!("{ms:.3}"))
            .unwrap_or_default();
        let speedup = row
            .speedup
            .map(|s| format!("{s:.2}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{:.3},{},{:.4}\n",
            row.num_cities, sequential, row.parallel_ms, speedup, row.best_cost
        ));
    }
    out
}
