//! Distance matrix precondition errors.

use std::error::Error;
use std::fmt;

/// A precondition violation detected when validating a distance matrix.
///
/// The solvers refuse to search a malformed instance; validation runs once
/// at solver entry, before any recursion.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// The matrix has no cities (n = 0).
    Empty,
    /// An entry is negative.
    NegativeDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The offending value.
        distance: f64,
    },
    /// An entry is NaN or infinite.
    NonFiniteDistance {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },
    /// A diagonal entry is non-zero.
    NonZeroDiagonal {
        /// The diagonal index.
        index: usize,
    },
    /// `matrix[i][j] != matrix[j][i]` for some pair.
    Asymmetric {
        /// Row index of the mismatched pair.
        from: usize,
        /// Column index of the mismatched pair.
        to: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "distance matrix has no cities"),
            Self::NegativeDistance { from, to, distance } => write!(
                f,
                "distance matrix entry ({from}, {to}) is negative: {distance}"
            ),
            Self::NonFiniteDistance { from, to } => {
                write!(f, "distance matrix entry ({from}, {to}) is not finite")
            }
            Self::NonZeroDiagonal { index } => {
                write!(f, "distance matrix diagonal entry ({index}, {index}) is non-zero")
            }
            Self::Asymmetric { from, to } => write!(
                f,
                "distance matrix is asymmetric at ({from}, {to})"
            ),
        }
    }
}

impl Error for MatrixError {}
