//! # tsp-exact
//!
//! Exact solving of the symmetric Traveling Salesman Problem by depth-first
//! branch-and-bound, with a single-threaded baseline and a multi-branch
//! parallel variant racing to tighten one shared best-known cost.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour)
//! - [`distance`] — Dense symmetric distance matrix and validation
//! - [`generate`] — Seeded random instance generation
//! - [`solver`] — Sequential and parallel branch-and-bound solvers
//! - [`benchmark`] — Harness comparing both solvers over sizes and trials

pub mod benchmark;
pub mod distance;
pub mod generate;
pub mod models;
pub mod solver;
