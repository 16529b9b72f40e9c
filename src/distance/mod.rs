//! Distance matrices for TSP instances.
//!
//! Provides a dense symmetric distance matrix, closed-tour cost evaluation,
//! and the precondition checks run before any search begins.

mod error;
mod matrix;

pub use error::MatrixError;
pub use matrix::DistanceMatrix;
