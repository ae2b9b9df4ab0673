//! Strongly-typed identifiers for registered masks and sources.

use std::fmt;

/// Identifies a mask registered with a depth field.
///
/// Assigned sequentially by the owning registry; never reused within the
/// lifetime of that registry, even after the mask is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaskId(pub u32);

impl fmt::Display for MaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaskId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a forcing source registered with a source set.
///
/// `SourceId(n)` is the n-th source attached to the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u32);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SourceId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(MaskId(3).to_string(), "3");
        assert_eq!(SourceId::from(7).to_string(), "7");
    }

    #[test]
    fn ids_order_by_registration() {
        assert!(MaskId(1) < MaskId(2));
        assert!(SourceId(0) < SourceId(10));
    }
}
