//! Axis-aligned rectangular footprints in domain coordinates.

/// An axis-aligned rectangle given by two x corners and two y corners.
///
/// Corners may be supplied in either order; membership is inclusive on
/// every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// The two x corners.
    pub x: (f64, f64),
    /// The two y corners.
    pub y: (f64, f64),
}

impl Rect {
    /// Rectangle spanning `x` and `y` corners.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Square of half-width `half` centred on `(x0, y0)`.
    pub fn centred(x0: f64, y0: f64, half: f64) -> Self {
        Self::new((x0 - half, x0 + half), (y0 - half, y0 + half))
    }

    /// `(min, max)` along x.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x.0.min(self.x.1), self.x.0.max(self.x.1))
    }

    /// `(min, max)` along y.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y.0.min(self.y.1), self.y.0.max(self.y.1))
    }

    /// Midpoint `(x, y)`.
    pub fn centre(&self) -> (f64, f64) {
        ((self.x.0 + self.x.1) / 2.0, (self.y.0 + self.y.1) / 2.0)
    }

    /// Whether every corner is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.0.is_finite() && self.x.1.is_finite() && self.y.0.is_finite() && self.y.1.is_finite()
    }

    /// Inclusive point membership.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (x_lo, x_hi) = self.x_bounds();
        let (y_lo, y_hi) = self.y_bounds();
        px >= x_lo && px <= x_hi && py >= y_lo && py <= y_hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_order_does_not_matter() {
        let a = Rect::new((1.0, -1.0), (2.0, 0.0));
        let b = Rect::new((-1.0, 1.0), (0.0, 2.0));
        assert_eq!(a.x_bounds(), b.x_bounds());
        assert_eq!(a.y_bounds(), b.y_bounds());
        assert!(a.contains(0.0, 1.0));
    }

    #[test]
    fn membership_is_inclusive() {
        let r = Rect::new((0.0, 1.0), (0.0, 1.0));
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(1.0, 1.0));
        assert!(!r.contains(1.0 + 1e-12, 0.5));
    }

    #[test]
    fn centred_square() {
        let r = Rect::centred(2.0, -3.0, 0.5);
        assert_eq!(r.x_bounds(), (1.5, 2.5));
        assert_eq!(r.y_bounds(), (-3.5, -2.5));
        assert_eq!(r.centre(), (2.0, -3.0));
    }
}
