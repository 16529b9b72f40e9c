//! Domain model types for TSP instances.
//!
//! Provides the core abstractions: cities as immutable points in the plane
//! and closed tours as fixed-origin visiting orders with their total cost.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
