//! Fixtures and float comparison helpers for Ripple development.
//!
//! [`fixtures`] builds the canonical tanks used across integration tests;
//! the free functions here compare grids with an explicit tolerance.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use ndarray::{s, Array2, ArrayView2, Zip};

/// Largest absolute elementwise difference. Panics on shape mismatch.
pub fn max_abs_diff(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "shape mismatch");
    Zip::from(&a)
        .and(&b)
        .fold(0.0_f64, |acc, &x, &y| acc.max((x - y).abs()))
}

/// Assert two grids agree within `tol` everywhere.
#[track_caller]
pub fn assert_grids_close(a: ArrayView2<'_, f64>, b: ArrayView2<'_, f64>, tol: f64) {
    let diff = max_abs_diff(a, b);
    assert!(diff <= tol, "grids differ by {diff:e} (tolerance {tol:e})");
}

/// Mirror a grid left to right (x → −x on a symmetric extent).
pub fn mirror_x(u: ArrayView2<'_, f64>) -> Array2<f64> {
    u.slice(s![.., ..;-1]).to_owned()
}

/// Mirror a grid bottom to top (y → −y on a symmetric extent).
pub fn mirror_y(u: ArrayView2<'_, f64>) -> Array2<f64> {
    u.slice(s![..;-1, ..]).to_owned()
}

/// Swap the axes (x ↔ y on a square grid).
pub fn transpose(u: ArrayView2<'_, f64>) -> Array2<f64> {
    u.t().to_owned()
}
