//! Error types reported by index construction and queries.

use std::error::Error;
use std::fmt;

/// Errors reported by [`KdTree`](crate::KdTree) construction and queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KdTreeError {
    /// Construction was given no points.
    EmptyPointSet,
    /// Construction was given points with no coordinates.
    ZeroDimension,
    /// A point's coordinate count differs from the first point's.
    MixedDimensions {
        /// Position of the offending point in the input.
        index: usize,
        /// Coordinate count of the first point.
        expected: usize,
        /// Coordinate count found at `index`.
        found: usize,
    },
    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate,
    /// The query's coordinate count differs from the indexed dimensionality.
    DimensionMismatch {
        /// Indexed dimensionality.
        expected: usize,
        /// Coordinate count of the query.
        found: usize,
    },
}

impl fmt::Display for KdTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPointSet => {
                write!(f, "cannot build an index from an empty point set")
            }
            Self::ZeroDimension => {
                write!(f, "points must have at least one coordinate")
            }
            Self::MixedDimensions { index, expected, found } => {
                write!(f, "point {} has {} coordinates, expected {}", index, found, expected)
            }
            Self::NonFiniteCoordinate => {
                write!(f, "coordinates must be finite")
            }
            Self::DimensionMismatch { expected, found } => {
                write!(f, "query has {} coordinates, tree is {}-dimensional", found, expected)
            }
        }
    }
}

impl Error for KdTreeError {}
