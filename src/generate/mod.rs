//! Seeded random instance generation.
//!
//! Collaborator utilities for producing test and benchmark instances. The
//! solvers themselves never depend on any random state — they take the
//! distance matrix as a pure function argument.

mod random;

pub use random::random_cities;
