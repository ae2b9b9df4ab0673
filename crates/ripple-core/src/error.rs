//! Error types for the Ripple wave tank.
//!
//! Organised by subsystem: tag parsing, depth masks, and forcing sources.
//! Every variant is raised at configuration time; nothing here is produced
//! while the integrator is advancing.

use std::error::Error;
use std::fmt;

/// An enumerated tag (boundary condition, unit, axis, direction) was not
/// in its recognised set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagError {
    /// Which kind of tag was being parsed.
    pub tag: &'static str,
    /// The rejected input, verbatim.
    pub value: String,
}

impl TagError {
    /// Build a tag error for `value`.
    pub fn new(tag: &'static str, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid {}", self.value, self.tag)
    }
}

impl Error for TagError {}

/// Errors from building or registering a depth mask.
#[derive(Clone, Debug, PartialEq)]
pub enum MaskError {
    /// A supplied array does not have the domain's `(ny, nx)` shape.
    ShapeMismatch {
        /// Domain shape `(ny, nx)`.
        expected: (usize, usize),
        /// Shape of the rejected array.
        got: (usize, usize),
    },
    /// A mask value lies outside `[0, 1]` (or is NaN).
    ValueOutOfRange {
        /// The first offending value.
        value: f64,
        /// `(row, col)` of the first offending cell.
        cell: (usize, usize),
    },
    /// The relative depth applied to a mask's zero cells is outside `[0, 1]`.
    InvalidRelativeDepth {
        /// The rejected value.
        value: f64,
    },
    /// A geometry generator received an unusable parameter.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// No mask with this id is registered.
    UnknownMask {
        /// The id that was looked up.
        id: crate::MaskId,
    },
    /// An axis or direction tag was not recognised.
    Tag(TagError),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "input array shape {}x{} does not match the tank grid {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
            Self::ValueOutOfRange { value, cell } => write!(
                f,
                "depth must be between 0 and 1, got {value} at cell ({}, {})",
                cell.0, cell.1
            ),
            Self::InvalidRelativeDepth { value } => {
                write!(f, "relative depth must be between 0 and 1, got {value}")
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid mask parameter {name}: {value}")
            }
            Self::UnknownMask { id } => write!(f, "no mask registered with id {id}"),
            Self::Tag(e) => write!(f, "{e}"),
        }
    }
}

impl Error for MaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tag(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TagError> for MaskError {
    fn from(e: TagError) -> Self {
        Self::Tag(e)
    }
}

/// Errors from constructing a forcing source.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceError {
    /// Amplitude fraction outside `[0, 1]` (or NaN).
    InvalidAmplitude {
        /// The rejected value.
        value: f64,
    },
    /// Frequency is zero, negative, or not finite.
    InvalidFrequency {
        /// The rejected value.
        value: f64,
    },
    /// Phase is not finite.
    InvalidPhase {
        /// The rejected value.
        value: f64,
    },
    /// A footprint corner is not finite.
    InvalidFootprint {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmplitude { value } => {
                write!(f, "amplitude must be between 0 and 1, got {value}")
            }
            Self::InvalidFrequency { value } => {
                write!(f, "frequency must be finite and > 0, got {value}")
            }
            Self::InvalidPhase { value } => write!(f, "phase must be finite, got {value}"),
            Self::InvalidFootprint { reason } => write!(f, "invalid source footprint: {reason}"),
        }
    }
}

impl Error for SourceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MaskId;

    #[test]
    fn shape_mismatch_reports_both_shapes() {
        let e = MaskError::ShapeMismatch {
            expected: (100, 100),
            got: (50, 100),
        };
        let msg = e.to_string();
        assert!(msg.contains("50x100"));
        assert!(msg.contains("100x100"));
    }

    #[test]
    fn tag_error_chains_as_source() {
        let e = MaskError::from(TagError::new("axis", "z"));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "'z' is not a valid axis");
    }

    #[test]
    fn unknown_mask_names_id() {
        let e = MaskError::UnknownMask { id: MaskId(4) };
        assert!(e.to_string().contains('4'));
    }

    #[test]
    fn source_errors_name_the_value() {
        let e = SourceError::InvalidAmplitude { value: 1.5 };
        assert!(e.to_string().contains("1.5"));
        let e = SourceError::InvalidFrequency { value: 0.0 };
        assert!(e.to_string().contains("> 0"));
    }
}
