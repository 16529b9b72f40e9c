//! Benchmark harness comparing the sequential and parallel solvers.
//!
//! Collaborator code: generates instances, times both solvers over the
//! configured sizes and repetitions, and renders the resulting table as
//! CSV. Nothing here affects solver correctness.

mod harness;
mod report;

pub use harness::{run_benchmarks, BenchmarkConfig, ScenarioResult};
pub use report::to_csv;
