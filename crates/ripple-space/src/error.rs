//! Error types for domain construction.

use ripple_core::Axis;
use std::fmt;

/// Errors arising from domain construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Axis bounds are inverted, equal, or not finite.
    InvalidExtent {
        /// The offending axis.
        axis: Axis,
        /// Lower bound as supplied.
        min: f64,
        /// Upper bound as supplied.
        max: f64,
    },
    /// An axis needs at least two samples to define a spacing.
    TooFewCells {
        /// The offending axis.
        axis: Axis,
        /// Number of cells requested.
        cells: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { axis, min, max } => {
                write!(f, "invalid {axis} extent ({min}, {max}): need finite min < max")
            }
            Self::TooFewCells { axis, cells } => {
                write!(f, "{axis} axis needs at least 2 cells, got {cells}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
