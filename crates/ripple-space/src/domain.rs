//! The tank's coordinate grid.

use crate::error::SpaceError;
use crate::region::Rect;
use ndarray::{Array1, Array2, Zip};
use ripple_core::Axis;

/// Bounding box of the tank in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Left edge.
    pub xmin: f64,
    /// Right edge.
    pub xmax: f64,
    /// Bottom edge.
    pub ymin: f64,
    /// Top edge.
    pub ymax: f64,
}

impl Extent {
    /// `[xmin, xmax, ymin, ymax]`, the layout image renderers expect.
    pub fn as_array(&self) -> [f64; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }

    /// Horizontal span.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical span.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
}

/// A rectangular grid of `ny × nx` linearly spaced sample points.
///
/// Immutable after construction. Cell spacing is the first difference of
/// each axis sample array, so the first and last samples sit exactly on
/// the extent's edges.
///
/// # Examples
///
/// ```
/// use ripple_space::Domain;
///
/// let d = Domain::new((-1.0, 1.0), (0.0, 4.0), 5, 3).unwrap();
/// assert_eq!(d.shape(), (3, 5));
/// assert!((d.dx() - 0.5).abs() < 1e-12);
/// assert!((d.dy() - 2.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Domain {
    extent: Extent,
    x: Array1<f64>,
    y: Array1<f64>,
    xx: Array2<f64>,
    yy: Array2<f64>,
    dx: f64,
    dy: f64,
}

impl Domain {
    /// Build a domain over `x_range × y_range` with `nx` columns and `ny` rows.
    ///
    /// Returns `Err(SpaceError::InvalidExtent)` if a range is not a finite
    /// interval with `min < max`, or `Err(SpaceError::TooFewCells)` if an
    /// axis has fewer than two samples.
    pub fn new(
        x_range: (f64, f64),
        y_range: (f64, f64),
        nx: usize,
        ny: usize,
    ) -> Result<Self, SpaceError> {
        check_range(Axis::X, x_range)?;
        check_range(Axis::Y, y_range)?;
        if nx < 2 {
            return Err(SpaceError::TooFewCells {
                axis: Axis::X,
                cells: nx,
            });
        }
        if ny < 2 {
            return Err(SpaceError::TooFewCells {
                axis: Axis::Y,
                cells: ny,
            });
        }

        let x = axis(x_range, nx);
        let y = axis(y_range, ny);
        let dx = x[1] - x[0];
        let dy = y[1] - y[0];
        let xx = Array2::from_shape_fn((ny, nx), |(_, c)| x[c]);
        let yy = Array2::from_shape_fn((ny, nx), |(r, _)| y[r]);

        Ok(Self {
            extent: Extent {
                xmin: x_range.0,
                xmax: x_range.1,
                ymin: y_range.0,
                ymax: y_range.1,
            },
            x,
            y,
            xx,
            yy,
            dx,
            dy,
        })
    }

    /// Grid shape as `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    /// Number of columns.
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Number of rows.
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.nx() * self.ny()
    }

    /// Column spacing.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Row spacing.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// `min(dx, dy)`, the spacing that bounds the stable step size.
    pub fn min_spacing(&self) -> f64 {
        self.dx.min(self.dy)
    }

    /// Bounding extent.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Column sample positions.
    pub fn x_axis(&self) -> &Array1<f64> {
        &self.x
    }

    /// Row sample positions.
    pub fn y_axis(&self) -> &Array1<f64> {
        &self.y
    }

    /// X coordinate of every cell (`ny × nx`).
    pub fn xx(&self) -> &Array2<f64> {
        &self.xx
    }

    /// Y coordinate of every cell (`ny × nx`).
    pub fn yy(&self) -> &Array2<f64> {
        &self.yy
    }

    /// Boolean grid marking the cells inside `rect` (inclusive bounds).
    pub fn footprint(&self, rect: &Rect) -> Array2<bool> {
        Zip::from(&self.xx)
            .and(&self.yy)
            .map_collect(|&x, &y| rect.contains(x, y))
    }

    /// Euclidean distance of every cell from `(x0, y0)`.
    pub fn radial_distance(&self, x0: f64, y0: f64) -> Array2<f64> {
        Zip::from(&self.xx)
            .and(&self.yy)
            .map_collect(|&x, &y| ((x - x0).powi(2) + (y - y0).powi(2)).sqrt())
    }

    /// A grid of this domain's shape filled with `value`.
    pub fn filled(&self, value: f64) -> Array2<f64> {
        Array2::from_elem(self.shape(), value)
    }
}

/// Linear samples with the last one pinned to the upper bound.
fn axis((min, max): (f64, f64), n: usize) -> Array1<f64> {
    let mut a = Array1::linspace(min, max, n);
    a[n - 1] = max;
    a
}

fn check_range(axis: Axis, (min, max): (f64, f64)) -> Result<(), SpaceError> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(SpaceError::InvalidExtent { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_domain() -> Domain {
        Domain::new((-15.0, 15.0), (-15.0, 15.0), 100, 100).unwrap()
    }

    #[test]
    fn spacing_is_first_difference() {
        let d = default_domain();
        assert!((d.dx() - 30.0 / 99.0).abs() < 1e-12);
        assert!((d.dy() - 30.0 / 99.0).abs() < 1e-12);
        assert_eq!(d.cell_count(), 10_000);
    }

    #[test]
    fn meshes_follow_row_col_convention() {
        let d = Domain::new((0.0, 3.0), (10.0, 11.0), 4, 2).unwrap();
        assert_eq!(d.shape(), (2, 4));
        assert_eq!(d.xx()[[0, 3]], 3.0);
        assert_eq!(d.xx()[[1, 0]], 0.0);
        assert_eq!(d.yy()[[0, 2]], 10.0);
        assert_eq!(d.yy()[[1, 2]], 11.0);
    }

    #[test]
    fn extent_matches_input() {
        let d = Domain::new((-2.0, 4.0), (1.0, 2.0), 10, 10).unwrap();
        assert_eq!(d.extent().as_array(), [-2.0, 4.0, 1.0, 2.0]);
        assert_eq!(d.extent().width(), 6.0);
    }

    #[test]
    fn rejects_inverted_extent() {
        match Domain::new((1.0, -1.0), (0.0, 1.0), 10, 10) {
            Err(SpaceError::InvalidExtent { axis: Axis::X, .. }) => {}
            other => panic!("expected InvalidExtent on x, got {other:?}"),
        }
    }

    #[test]
    fn rejects_nan_extent() {
        assert!(Domain::new((0.0, 1.0), (f64::NAN, 1.0), 10, 10).is_err());
    }

    #[test]
    fn rejects_single_cell_axis() {
        match Domain::new((0.0, 1.0), (0.0, 1.0), 10, 1) {
            Err(SpaceError::TooFewCells { axis: Axis::Y, cells: 1 }) => {}
            other => panic!("expected TooFewCells on y, got {other:?}"),
        }
    }

    #[test]
    fn footprint_of_default_source_is_four_by_four() {
        let d = default_domain();
        let fp = d.footprint(&Rect::new((-0.5, 0.5), (-0.5, 0.5)));
        assert_eq!(fp.iter().filter(|&&b| b).count(), 16);
    }

    #[test]
    fn last_sample_sits_on_the_edge() {
        let d = Domain::new((-50.0, 50.0), (-15.0, 15.0), 40, 20).unwrap();
        assert_eq!(d.x_axis()[39], 50.0);
        assert_eq!(d.y_axis()[19], 15.0);
        let full = d.footprint(&Rect::new((-50.0, 50.0), (-15.0, 15.0)));
        assert!(full.iter().all(|&b| b));
    }

    #[test]
    fn radial_distance_is_zero_at_sample() {
        let d = Domain::new((0.0, 4.0), (0.0, 4.0), 5, 5).unwrap();
        let r = d.radial_distance(2.0, 2.0);
        assert_eq!(r[[2, 2]], 0.0);
        assert!((r[[0, 0]] - 8.0_f64.sqrt()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn footprint_matches_pointwise_predicate(
            x0 in -15.0f64..15.0,
            x1 in -15.0f64..15.0,
            y0 in -15.0f64..15.0,
            y1 in -15.0f64..15.0,
        ) {
            let d = Domain::new((-15.0, 15.0), (-15.0, 15.0), 31, 21).unwrap();
            let rect = Rect::new((x0, x1), (y0, y1));
            let fp = d.footprint(&rect);
            for ((r, c), &inside) in fp.indexed_iter() {
                let x = d.x_axis()[c];
                let y = d.y_axis()[r];
                let expected = x >= x0.min(x1) && x <= x0.max(x1) && y >= y0.min(y1) && y <= y0.max(y1);
                prop_assert_eq!(inside, expected);
            }
        }
    }
}
