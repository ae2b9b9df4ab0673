//! Tank configuration, validation, and error types.
//!
//! [`TankConfig`] is the input for [`RippleTank::new`](crate::RippleTank::new).
//! [`validate()`](TankConfig::validate) checks every scalar invariant and
//! builds the domain once to surface extent errors.

use std::error::Error;
use std::fmt;

use ripple_core::{BoundaryCondition, MaskError, SourceError, TagError, Units};
use ripple_space::{Domain, SpaceError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a tank configuration or run request.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Domain construction failed.
    Space(SpaceError),
    /// A textual tag was not recognised.
    Tag(TagError),
    /// Base depth is NaN, infinite, zero, or negative.
    InvalidDepth {
        /// The invalid value.
        value: f64,
    },
    /// Stability factor is NaN, infinite, zero, or negative.
    InvalidAlpha {
        /// The invalid value.
        value: f64,
    },
    /// Step size is NaN, infinite, zero, or negative.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// A run request parameter is unusable.
    InvalidRunRequest {
        /// Description of which parameter was rejected.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "domain: {e}"),
            Self::Tag(e) => write!(f, "{e}"),
            Self::InvalidDepth { value } => {
                write!(f, "depth must be finite and positive, got {value}")
            }
            Self::InvalidAlpha { value } => {
                write!(f, "alpha must be finite and positive, got {value}")
            }
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidRunRequest { reason } => write!(f, "invalid run request: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Tag(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<TagError> for ConfigError {
    fn from(e: TagError) -> Self {
        Self::Tag(e)
    }
}

// ── TankError ──────────────────────────────────────────────────────

/// Any failure of a mutating [`RippleTank`](crate::RippleTank) call.
#[derive(Clone, Debug, PartialEq)]
pub enum TankError {
    /// Configuration or run request rejected.
    Config(ConfigError),
    /// Mask rejected.
    Mask(MaskError),
    /// Source rejected.
    Source(SourceError),
}

impl fmt::Display for TankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Mask(e) => write!(f, "mask: {e}"),
            Self::Source(e) => write!(f, "source: {e}"),
        }
    }
}

impl Error for TankError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Mask(e) => Some(e),
            Self::Source(e) => Some(e),
        }
    }
}

impl From<ConfigError> for TankError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MaskError> for TankError {
    fn from(e: MaskError) -> Self {
        Self::Mask(e)
    }
}

impl From<SourceError> for TankError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<TagError> for TankError {
    fn from(e: TagError) -> Self {
        Self::Config(ConfigError::Tag(e))
    }
}

// ── TankConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a ripple tank.
#[derive(Clone, Debug, PartialEq)]
pub struct TankConfig {
    /// Horizontal extent `(xmin, xmax)`. Default: `(-15, 15)`.
    pub x_range: (f64, f64),
    /// Vertical extent `(ymin, ymax)`. Default: `(-15, 15)`.
    pub y_range: (f64, f64),
    /// Number of columns. Default: 100. Minimum: 2.
    pub nx: usize,
    /// Number of rows. Default: 100. Minimum: 2.
    pub ny: usize,
    /// Depth of open water. Default: 1.
    pub depth: f64,
    /// Border treatment. Default: open.
    pub boundary: BoundaryCondition,
    /// Length unit; selects gravity. Default: cm.
    pub units: Units,
    /// Fraction of the maximum stable step used as the step size.
    /// Default: 0.45.
    pub alpha: f64,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            x_range: (-15.0, 15.0),
            y_range: (-15.0, 15.0),
            nx: 100,
            ny: 100,
            depth: 1.0,
            boundary: BoundaryCondition::Open,
            units: Units::Cm,
            alpha: 0.45,
        }
    }
}

impl TankConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.domain()?;
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(ConfigError::InvalidDepth { value: self.depth });
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidAlpha { value: self.alpha });
        }
        Ok(())
    }

    /// Build the domain described by this configuration.
    pub fn domain(&self) -> Result<Domain, SpaceError> {
        Domain::new(self.x_range, self.y_range, self.nx, self.ny)
    }

    /// Gravitational constant for the configured units.
    pub fn gravity(&self) -> f64 {
        self.units.gravity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::Axis;

    #[test]
    fn default_config_is_valid() {
        assert!(TankConfig::default().validate().is_ok());
    }

    #[test]
    fn default_matches_classic_tank() {
        let c = TankConfig::default();
        assert_eq!(c.x_range, (-15.0, 15.0));
        assert_eq!((c.nx, c.ny), (100, 100));
        assert_eq!(c.boundary, BoundaryCondition::Open);
        assert_eq!(c.gravity(), 980.0);
        assert_eq!(c.alpha, 0.45);
    }

    #[test]
    fn non_positive_depth_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = TankConfig {
                depth: bad,
                ..TankConfig::default()
            };
            match cfg.validate() {
                Err(ConfigError::InvalidDepth { .. }) => {}
                other => panic!("expected InvalidDepth, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_positive_alpha_rejected() {
        let cfg = TankConfig {
            alpha: 0.0,
            ..TankConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidAlpha { value }) => assert_eq!(value, 0.0),
            other => panic!("expected InvalidAlpha, got {other:?}"),
        }
    }

    #[test]
    fn inverted_extent_surfaces_space_error() {
        let cfg = TankConfig {
            y_range: (5.0, -5.0),
            ..TankConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Space(SpaceError::InvalidExtent { axis, .. })) => {
                assert_eq!(axis, Axis::Y);
            }
            other => panic!("expected Space(InvalidExtent), got {other:?}"),
        }
    }

    #[test]
    fn tag_errors_convert_and_chain() {
        let tag = "periodic".parse::<BoundaryCondition>().unwrap_err();
        let e = TankError::from(tag);
        assert!(e.source().is_some());
        assert!(e.to_string().contains("'periodic' is not a valid boundary condition"));
    }
}
