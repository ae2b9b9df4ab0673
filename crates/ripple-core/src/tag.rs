//! Enumerated configuration tags.
//!
//! Every tag parses from its textual form through [`FromStr`], rejecting
//! anything outside the recognised set with a [`TagError`] that names the
//! offending value.

use crate::error::TagError;
use std::fmt;
use std::str::FromStr;

/// How the integrator treats the outermost ring of cells.
///
/// # Examples
///
/// ```
/// use ripple_core::BoundaryCondition;
///
/// let bc: BoundaryCondition = "open".parse().unwrap();
/// assert_eq!(bc, BoundaryCondition::Open);
/// assert!("leaky".parse::<BoundaryCondition>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// One-sided first-order update that lets outgoing waves leave the tank.
    #[default]
    Open,
    /// Border cells are frozen after the bootstrap, reflecting incoming waves.
    Closed,
}

impl BoundaryCondition {
    /// Canonical textual form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryCondition {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" | "close" => Ok(Self::Closed),
            other => Err(TagError::new("boundary condition", other)),
        }
    }
}

/// Length unit of the tank. Selects the gravitational constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Units {
    /// Centimetres (`g = 980 cm/s²`).
    #[default]
    Cm,
    /// Metres (`g = 9.8 m/s²`).
    M,
}

impl Units {
    /// Gravitational acceleration expressed in these units per second squared.
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Cm => 980.0,
            Self::M => 9.8,
        }
    }

    /// Short label used on axes and colour bars.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::M => "m",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Units {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            other => Err(TagError::new("unit", other)),
        }
    }
}

/// Grid axis selector used by the slit and half-circle generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (columns).
    X,
    /// Vertical axis (rows).
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

impl FromStr for Axis {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            other => Err(TagError::new("axis", other)),
        }
    }
}

/// Which half of a circle survives in the half-circle generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Keep the half below (or left of) the centre line.
    Upper,
    /// Keep the half above (or right of) the centre line.
    Lower,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upper => f.write_str("upper"),
            Self::Lower => f.write_str("lower"),
        }
    }
}

impl FromStr for Direction {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            other => Err(TagError::new("direction", other)),
        }
    }
}

/// Time profile of a forcing source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Single impulse of `-1` at step 0, no forcing afterwards.
    Drop,
    /// `sin(2π·f·t + φ)`.
    #[default]
    Sine,
    /// Sign of the sine (`+1`, `-1`, or `0`).
    Square,
}

impl Waveform {
    /// Canonical textual form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Sine => "sine",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Waveform {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(Self::Drop),
            "sine" => Ok(Self::Sine),
            "square" => Ok(Self::Square),
            other => Err(TagError::new("waveform", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_accepts_both_closed_spellings() {
        assert_eq!("closed".parse::<BoundaryCondition>().unwrap(), BoundaryCondition::Closed);
        assert_eq!("close".parse::<BoundaryCondition>().unwrap(), BoundaryCondition::Closed);
        assert_eq!("open".parse::<BoundaryCondition>().unwrap(), BoundaryCondition::Open);
    }

    #[test]
    fn boundary_rejects_unknown_and_names_value() {
        let err = "periodic".parse::<BoundaryCondition>().unwrap_err();
        assert_eq!(err.value, "periodic");
        assert_eq!(err.to_string(), "'periodic' is not a valid boundary condition");
    }

    #[test]
    fn units_select_gravity() {
        assert_eq!(Units::Cm.gravity(), 980.0);
        assert_eq!(Units::M.gravity(), 9.8);
        assert!(Units::Cm.gravity() > Units::M.gravity());
        assert!("km".parse::<Units>().is_err());
    }

    #[test]
    fn axis_is_case_insensitive_for_single_letters() {
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Y);
        let err = "z".parse::<Axis>().unwrap_err();
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn direction_error_names_the_value() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.to_string(), "'sideways' is not a valid direction");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for bc in [BoundaryCondition::Open, BoundaryCondition::Closed] {
            assert_eq!(bc.to_string().parse::<BoundaryCondition>().unwrap(), bc);
        }
        for u in [Units::Cm, Units::M] {
            assert_eq!(u.to_string().parse::<Units>().unwrap(), u);
        }
        for w in [Waveform::Drop, Waveform::Sine, Waveform::Square] {
            assert_eq!(w.to_string().parse::<Waveform>().unwrap(), w);
        }
    }

    proptest! {
        #[test]
        fn rejected_tags_echo_their_input(s in "[a-zA-Z]{0,12}") {
            if let Err(e) = s.parse::<BoundaryCondition>() {
                prop_assert_eq!(&e.value, &s);
                prop_assert!(!matches!(s.as_str(), "open" | "closed" | "close"));
            }
            if let Err(e) = s.parse::<Axis>() {
                prop_assert_eq!(e.tag, "axis");
                prop_assert_eq!(&e.value, &s);
            }
        }
    }
}
