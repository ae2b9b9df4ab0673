//! Leapfrog stencil over whole grids.
//!
//! Every update is a batched [`Zip`] over shifted slices of the current
//! snapshot; there is no per-cell indexing in the hot path.
//!
//! Conventions: row index is y, column index is x. Border cells (first and
//! last row and column) never receive the interior second difference.

use ndarray::{s, Array2, ArrayView2, ArrayViewMut2, Zip};
use ripple_core::BoundaryCondition;

/// Step parameters shared by the bootstrap and the recurrence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stencil {
    /// Step size.
    pub dt: f64,
    /// Column spacing.
    pub dx: f64,
    /// Row spacing.
    pub dy: f64,
    /// Gravitational constant.
    pub gravity: f64,
    /// Border treatment.
    pub boundary: BoundaryCondition,
}

impl Stencil {
    /// Local propagation speed `sqrt(g · (h + u))`.
    ///
    /// Cells whose total depth is zero or negative have speed zero. NaN
    /// heights give NaN speeds so divergence stays visible.
    pub fn speed(&self, masked_depth: &Array2<f64>, height: ArrayView2<'_, f64>) -> Array2<f64> {
        let g = self.gravity;
        Zip::from(masked_depth)
            .and(&height)
            .map_collect(|&h, &u| {
                let total = h + u;
                if total <= 0.0 {
                    0.0
                } else {
                    (g * total).sqrt()
                }
            })
    }

    /// `rx·(u[x+1] − 2u + u[x−1]) + ry·(u[y+1] − 2u + u[y−1])` on interior
    /// cells, zero on the border.
    pub fn second_difference(&self, u: ArrayView2<'_, f64>, speed: &Array2<f64>) -> Array2<f64> {
        let (ny, nx) = u.dim();
        let mut out = Array2::zeros((ny, nx));
        if ny < 3 || nx < 3 {
            return out;
        }
        let kx = self.dt / self.dx;
        let ky = self.dt / self.dy;

        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(u.slice(s![1..-1, 1..-1]))
            .and(u.slice(s![1..-1, ..-2]))
            .and(u.slice(s![1..-1, 2..]))
            .and(speed.slice(s![1..-1, 1..-1]))
            .for_each(|o, &uc, &w, &e, &c| {
                let r = c * kx;
                *o = r * r * (w - 2.0 * uc + e);
            });
        Zip::from(out.slice_mut(s![1..-1, 1..-1]))
            .and(u.slice(s![1..-1, 1..-1]))
            .and(u.slice(s![..-2, 1..-1]))
            .and(u.slice(s![2.., 1..-1]))
            .and(speed.slice(s![1..-1, 1..-1]))
            .for_each(|o, &uc, &sth, &nth, &c| {
                let r = c * ky;
                *o += r * r * (sth - 2.0 * uc + nth);
            });
        out
    }

    /// First snapshot from rest: `u1 = u0 + L(u0)`, speed taken from `u0`.
    ///
    /// Border cells of `u1` keep their `u0` value.
    pub fn bootstrap(
        &self,
        masked_depth: &Array2<f64>,
        u0: ArrayView2<'_, f64>,
        mut u1: ArrayViewMut2<'_, f64>,
    ) {
        let c = self.speed(masked_depth, u0);
        let lap = self.second_difference(u0, &c);
        Zip::from(&mut u1)
            .and(&u0)
            .and(&lap)
            .for_each(|n, &u, &l| *n = u + l);
    }

    /// One leapfrog step from `(prev, cur)` into `next`.
    ///
    /// Returns the speed field used for the step.
    pub fn advance(
        &self,
        masked_depth: &Array2<f64>,
        prev: ArrayView2<'_, f64>,
        cur: ArrayView2<'_, f64>,
        mut next: ArrayViewMut2<'_, f64>,
    ) -> Array2<f64> {
        let c = self.speed(masked_depth, cur);
        let lap = self.second_difference(cur, &c);

        Zip::from(next.slice_mut(s![1..-1, 1..-1]))
            .and(cur.slice(s![1..-1, 1..-1]))
            .and(prev.slice(s![1..-1, 1..-1]))
            .and(lap.slice(s![1..-1, 1..-1]))
            .for_each(|n, &u, &p, &l| *n = 2.0 * u - p + l);

        match self.boundary {
            BoundaryCondition::Open => self.open_borders(cur, &c, next.view_mut()),
            BoundaryCondition::Closed => closed_borders(cur, next.view_mut()),
        }

        Zip::from(&mut next).and(&c).for_each(|n, &s| {
            if s == 0.0 {
                *n = 0.0;
            }
        });
        c
    }

    /// One-sided outgoing-wave update of the border ring.
    ///
    /// Each border cell moves toward its inward neighbour by the local
    /// ratio `c·Δt/Δy` (rows) or `c·Δt/Δx` (columns). Columns are written
    /// after rows, so corners take the column update.
    pub fn open_borders(
        &self,
        cur: ArrayView2<'_, f64>,
        speed: &Array2<f64>,
        mut next: ArrayViewMut2<'_, f64>,
    ) {
        let (ny, nx) = cur.dim();
        let kx = self.dt / self.dx;
        let ky = self.dt / self.dy;
        let edge = |k: f64| move |n: &mut f64, &b: &f64, &inner: &f64, &c: &f64| {
            *n = b + c * k * (inner - b);
        };

        Zip::from(next.row_mut(0))
            .and(cur.row(0))
            .and(cur.row(1))
            .and(speed.row(0))
            .for_each(edge(ky));
        Zip::from(next.row_mut(ny - 1))
            .and(cur.row(ny - 1))
            .and(cur.row(ny - 2))
            .and(speed.row(ny - 1))
            .for_each(edge(ky));
        Zip::from(next.column_mut(0))
            .and(cur.column(0))
            .and(cur.column(1))
            .and(speed.column(0))
            .for_each(edge(kx));
        Zip::from(next.column_mut(nx - 1))
            .and(cur.column(nx - 1))
            .and(cur.column(nx - 2))
            .and(speed.column(nx - 1))
            .for_each(edge(kx));
    }
}

/// Border cells carry their current value forward.
pub fn closed_borders(cur: ArrayView2<'_, f64>, mut next: ArrayViewMut2<'_, f64>) {
    let (ny, nx) = cur.dim();
    next.row_mut(0).assign(&cur.row(0));
    next.row_mut(ny - 1).assign(&cur.row(ny - 1));
    next.column_mut(0).assign(&cur.column(0));
    next.column_mut(nx - 1).assign(&cur.column(nx - 1));
}
