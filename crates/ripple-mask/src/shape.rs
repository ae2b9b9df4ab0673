//! Mask geometry generators.
//!
//! Each [`MaskShape`] variant is a pure function of the domain's coordinate
//! meshes and its own parameters. Generated fields use `1` for background
//! and `0` for the feature; raw arrays may be graded.

use ndarray::{Array2, Zip};
use ripple_core::{Axis, Direction, MaskError};
use ripple_space::{Domain, Rect};

/// Fraction of the opening's span used as the slit gap when none is given.
pub const DEFAULT_SLIT_FRACTION: f64 = 0.05;

/// Ring thickness used by the circle helpers when none is given.
pub const DEFAULT_RING_WIDTH: f64 = 1.0;

/// A mask generator together with its parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum MaskShape {
    /// Cells inside the rectangle (inclusive bounds) are zero.
    Rectangle {
        /// Footprint of the obstruction.
        rect: Rect,
    },
    /// Annulus of outer radius `radius` and thickness `width`: cells with
    /// `radius - width < R <= radius` are zero.
    Circle {
        /// Centre x.
        x0: f64,
        /// Centre y.
        y0: f64,
        /// Outer radius.
        radius: f64,
        /// Ring thickness.
        width: f64,
    },
    /// A circle with one half reset to open water.
    ///
    /// With `axis = X` the split line is `y = y0`; `Upper` clears the half
    /// at and above it, `Lower` the half at and below it. With `axis = Y`
    /// the split line is `x = x0`; `Upper` clears the left half, `Lower`
    /// the right half.
    HalfCircle {
        /// Centre x.
        x0: f64,
        /// Centre y.
        y0: f64,
        /// Outer radius.
        radius: f64,
        /// Ring thickness.
        width: f64,
        /// Axis the split line runs along.
        axis: Axis,
        /// Which side of the split line is cleared.
        direction: Direction,
    },
    /// Two rectangular walls filling `rect` except for a central gap.
    ///
    /// The gap runs across the wall along `axis` and is `gap` wide, or
    /// [`DEFAULT_SLIT_FRACTION`] of the rectangle's span on that axis when
    /// `gap` is `None`.
    SingleSlit {
        /// Footprint of the whole wall, gap included.
        rect: Rect,
        /// Gap width.
        gap: Option<f64>,
        /// Axis along which the wall is split.
        axis: Axis,
    },
    /// A precomputed field, taken as is.
    Array(Array2<f64>),
}

impl MaskShape {
    /// Rectangle from x and y corners.
    pub fn rectangle(x: (f64, f64), y: (f64, f64)) -> Self {
        Self::Rectangle {
            rect: Rect::new(x, y),
        }
    }

    /// Circle of unit ring thickness.
    pub fn circle(x0: f64, y0: f64, radius: f64) -> Self {
        Self::Circle {
            x0,
            y0,
            radius,
            width: DEFAULT_RING_WIDTH,
        }
    }

    /// Half circle with textual axis (`x`, `X`, `y`, `Y`) and direction
    /// (`upper`, `lower`) tags.
    pub fn half_circle(
        x0: f64,
        y0: f64,
        radius: f64,
        width: f64,
        on: &str,
        direction: &str,
    ) -> Result<Self, MaskError> {
        Ok(Self::HalfCircle {
            x0,
            y0,
            radius,
            width,
            axis: on.parse()?,
            direction: direction.parse()?,
        })
    }

    /// Single slit across `rect` with a textual axis tag and default gap.
    pub fn single_slit(x: (f64, f64), y: (f64, f64), on: &str) -> Result<Self, MaskError> {
        Ok(Self::SingleSlit {
            rect: Rect::new(x, y),
            gap: None,
            axis: on.parse()?,
        })
    }

    /// Short name of the generator, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::HalfCircle { .. } => "half-circle",
            Self::SingleSlit { .. } => "single-slit",
            Self::Array(_) => "array",
        }
    }

    /// Evaluate the generator over `domain`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` for non-finite coordinates or negative radius,
    ///   ring width, or gap.
    /// - `ShapeMismatch` if an `Array` does not match the domain shape.
    pub fn generate(&self, domain: &Domain) -> Result<Array2<f64>, MaskError> {
        match self {
            Self::Rectangle { rect } => {
                check_rect(rect)?;
                Ok(rectangle(domain, rect))
            }
            Self::Circle {
                x0,
                y0,
                radius,
                width,
            } => {
                check_circle(*x0, *y0, *radius, *width)?;
                Ok(circle(domain, *x0, *y0, *radius, *width))
            }
            Self::HalfCircle {
                x0,
                y0,
                radius,
                width,
                axis,
                direction,
            } => {
                check_circle(*x0, *y0, *radius, *width)?;
                Ok(half_circle(
                    domain, *x0, *y0, *radius, *width, *axis, *direction,
                ))
            }
            Self::SingleSlit { rect, gap, axis } => {
                check_rect(rect)?;
                if let Some(g) = gap {
                    check_non_negative("gap", *g)?;
                }
                Ok(single_slit(domain, rect, *gap, *axis))
            }
            Self::Array(values) => {
                if values.dim() != domain.shape() {
                    return Err(MaskError::ShapeMismatch {
                        expected: domain.shape(),
                        got: values.dim(),
                    });
                }
                Ok(values.clone())
            }
        }
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), MaskError> {
    if !value.is_finite() {
        return Err(MaskError::InvalidParameter { name, value });
    }
    Ok(())
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), MaskError> {
    if !(value >= 0.0) || !value.is_finite() {
        return Err(MaskError::InvalidParameter { name, value });
    }
    Ok(())
}

fn check_rect(rect: &Rect) -> Result<(), MaskError> {
    check_finite("x corner", rect.x.0)?;
    check_finite("x corner", rect.x.1)?;
    check_finite("y corner", rect.y.0)?;
    check_finite("y corner", rect.y.1)
}

fn check_circle(x0: f64, y0: f64, radius: f64, width: f64) -> Result<(), MaskError> {
    check_finite("x0", x0)?;
    check_finite("y0", y0)?;
    check_non_negative("radius", radius)?;
    check_non_negative("width", width)
}

/// Ones everywhere except zero inside `rect`.
pub fn rectangle(domain: &Domain, rect: &Rect) -> Array2<f64> {
    domain
        .footprint(rect)
        .mapv(|inside| if inside { 0.0 } else { 1.0 })
}

/// Ones everywhere except zero on the ring `radius - width < R <= radius`.
pub fn circle(domain: &Domain, x0: f64, y0: f64, radius: f64, width: f64) -> Array2<f64> {
    domain.radial_distance(x0, y0).mapv(|r| {
        if r <= radius && r > radius - width {
            0.0
        } else {
            1.0
        }
    })
}

/// A [`circle`] with the half selected by `axis` and `direction` reset to one.
pub fn half_circle(
    domain: &Domain,
    x0: f64,
    y0: f64,
    radius: f64,
    width: f64,
    axis: Axis,
    direction: Direction,
) -> Array2<f64> {
    let mut mask = circle(domain, x0, y0, radius, width);
    let e = domain.extent();
    let cleared = match (axis, direction) {
        (Axis::X, Direction::Upper) => Rect::new((e.xmin, e.xmax), (y0, e.ymax)),
        (Axis::X, Direction::Lower) => Rect::new((e.xmin, e.xmax), (e.ymin, y0)),
        (Axis::Y, Direction::Upper) => Rect::new((e.xmin, x0), (e.ymin, e.ymax)),
        (Axis::Y, Direction::Lower) => Rect::new((x0, e.xmax), (e.ymin, e.ymax)),
    };
    Zip::from(&mut mask)
        .and(&domain.footprint(&cleared))
        .for_each(|m, &clear| {
            if clear {
                *m = 1.0;
            }
        });
    mask
}

/// Two walls filling `rect` with a central gap along `axis`.
pub fn single_slit(domain: &Domain, rect: &Rect, gap: Option<f64>, axis: Axis) -> Array2<f64> {
    let (x_lo, x_hi) = rect.x_bounds();
    let (y_lo, y_hi) = rect.y_bounds();
    let (mid_x, mid_y) = rect.centre();
    let span = match axis {
        Axis::X => x_hi - x_lo,
        Axis::Y => y_hi - y_lo,
    };
    let half = gap.unwrap_or(DEFAULT_SLIT_FRACTION * span) / 2.0;

    let (first, second) = match axis {
        Axis::X => (
            Rect::new((x_lo, mid_x - half), rect.y),
            Rect::new((mid_x + half, x_hi), rect.y),
        ),
        Axis::Y => (
            Rect::new(rect.x, (y_lo, mid_y - half)),
            Rect::new(rect.x, (mid_y + half, y_hi)),
        ),
    };
    rectangle(domain, &first) * rectangle(domain, &second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tank_domain() -> Domain {
        Domain::new((-15.0, 15.0), (-15.0, 15.0), 100, 100).unwrap()
    }

    // ---------------------------------------------------------------
    // Rectangle
    // ---------------------------------------------------------------

    #[test]
    fn rectangle_zero_inside_one_outside() {
        let d = Domain::new((0.0, 4.0), (0.0, 4.0), 5, 5).unwrap();
        let m = MaskShape::rectangle((1.0, 2.0), (3.0, 1.0))
            .generate(&d)
            .unwrap();
        for ((r, c), &v) in m.indexed_iter() {
            let inside = (1..=2).contains(&c) && (1..=3).contains(&r);
            assert_eq!(v, if inside { 0.0 } else { 1.0 }, "cell ({r},{c})");
        }
    }

    #[test]
    fn rectangle_rejects_nan_corner() {
        let d = tank_domain();
        let err = MaskShape::rectangle((f64::NAN, 1.0), (0.0, 1.0))
            .generate(&d)
            .unwrap_err();
        assert!(matches!(err, MaskError::InvalidParameter { .. }));
    }

    // ---------------------------------------------------------------
    // Circle and half circle
    // ---------------------------------------------------------------

    #[test]
    fn circle_is_a_ring() {
        let d = Domain::new((-5.0, 5.0), (-5.0, 5.0), 11, 11).unwrap();
        let m = circle(&d, 0.0, 0.0, 3.0, 1.0);
        assert_eq!(m[[5, 5]], 1.0, "centre stays open");
        assert_eq!(m[[5, 8]], 0.0, "R = 3 is on the ring");
        assert_eq!(m[[5, 7]], 1.0, "R = 2 is inside the hole");
        assert_eq!(m[[5, 9]], 1.0, "R = 4 is outside");
    }

    #[test]
    fn circle_rejects_negative_radius() {
        let d = tank_domain();
        let err = MaskShape::circle(0.0, 0.0, -1.0).generate(&d).unwrap_err();
        assert_eq!(
            err,
            MaskError::InvalidParameter {
                name: "radius",
                value: -1.0
            }
        );
    }

    #[test]
    fn half_circle_on_x_lower_keeps_upper_arc() {
        let d = Domain::new((-5.0, 5.0), (-5.0, 5.0), 11, 11).unwrap();
        let m = half_circle(&d, 0.0, 0.0, 3.0, 1.0, Axis::X, Direction::Lower);
        // Row 8 is y = 3, row 2 is y = -3.
        assert_eq!(m[[8, 5]], 0.0, "arc above the split survives");
        assert_eq!(m[[2, 5]], 1.0, "arc below the split is cleared");
    }

    #[test]
    fn half_circle_on_y_upper_clears_left_half() {
        let d = Domain::new((-5.0, 5.0), (-5.0, 5.0), 11, 11).unwrap();
        let m = half_circle(&d, 0.0, 0.0, 3.0, 1.0, Axis::Y, Direction::Upper);
        assert_eq!(m[[5, 2]], 1.0, "left arc cleared");
        assert_eq!(m[[5, 8]], 0.0, "right arc survives");
    }

    #[test]
    fn half_circle_rejects_bad_direction_naming_it() {
        let err = MaskShape::half_circle(0.0, 0.0, 3.0, 1.0, "x", "sideways").unwrap_err();
        assert_eq!(err.to_string(), "'sideways' is not a valid direction");
    }

    #[test]
    fn half_circle_rejects_bad_axis() {
        let err = MaskShape::half_circle(0.0, 0.0, 3.0, 1.0, "z", "upper").unwrap_err();
        assert!(matches!(err, MaskError::Tag(_)));
    }

    // ---------------------------------------------------------------
    // Single slit
    // ---------------------------------------------------------------

    #[test]
    fn slit_default_gap_is_five_percent_of_span() {
        let d = tank_domain();
        let dy = d.dy();
        let m = MaskShape::single_slit((-15.0, 15.0), (0.0, dy), "x")
            .unwrap()
            .generate(&d)
            .unwrap();
        let half_gap = 0.05 * 30.0 / 2.0;
        for ((r, c), &v) in m.indexed_iter() {
            let x = d.x_axis()[c];
            let y = d.y_axis()[r];
            let in_wall_rows = (0.0..=dy).contains(&y);
            if !in_wall_rows {
                assert_eq!(v, 1.0);
            } else if x.abs() < half_gap {
                assert_eq!(v, 1.0, "gap cell x={x} must be open");
            } else if x.abs() > half_gap {
                assert_eq!(v, 0.0, "wall cell x={x} must be closed");
            }
        }
        let open_in_wall_row = m.row(50).iter().filter(|&&v| v == 1.0).count();
        assert_eq!(open_in_wall_row, 4);
    }

    #[test]
    fn slit_explicit_gap_along_y() {
        let d = Domain::new((0.0, 10.0), (0.0, 10.0), 11, 11).unwrap();
        let m = single_slit(&d, &Rect::new((4.0, 5.0), (0.0, 10.0)), Some(3.0), Axis::Y);
        // Gap spans y in [3.5, 6.5]: rows 4..=6 open.
        for r in 0..11 {
            let expected = if (4..=6).contains(&r) { 1.0 } else { 0.0 };
            assert_eq!(m[[r, 4]], expected, "row {r}");
        }
        assert_eq!(m[[5, 0]], 1.0, "outside the wall footprint");
    }

    #[test]
    fn slit_rejects_invalid_axis_tag() {
        let err = MaskShape::single_slit((0.0, 1.0), (0.0, 1.0), "diagonal").unwrap_err();
        assert_eq!(err.to_string(), "'diagonal' is not a valid axis");
    }

    // ---------------------------------------------------------------
    // Raw arrays
    // ---------------------------------------------------------------

    #[test]
    fn array_shape_is_checked() {
        let d = Domain::new((0.0, 1.0), (0.0, 1.0), 4, 3).unwrap();
        let err = MaskShape::Array(Array2::ones((4, 3))).generate(&d).unwrap_err();
        assert_eq!(
            err,
            MaskError::ShapeMismatch {
                expected: (3, 4),
                got: (4, 3)
            }
        );
    }

    proptest! {
        #[test]
        fn rectangle_matches_inclusive_box(
            x0 in -16.0f64..16.0,
            x1 in -16.0f64..16.0,
            y0 in -16.0f64..16.0,
            y1 in -16.0f64..16.0,
        ) {
            let d = Domain::new((-15.0, 15.0), (-15.0, 15.0), 40, 30).unwrap();
            let m = MaskShape::rectangle((x0, x1), (y0, y1)).generate(&d).unwrap();
            for ((r, c), &v) in m.indexed_iter() {
                let x = d.x_axis()[c];
                let y = d.y_axis()[r];
                let inside = x >= x0.min(x1) && x <= x0.max(x1)
                    && y >= y0.min(y1) && y <= y0.max(y1);
                prop_assert_eq!(v, if inside { 0.0 } else { 1.0 });
            }
        }
    }
}
