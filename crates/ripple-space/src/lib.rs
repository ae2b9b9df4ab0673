//! Spatial domain of the Ripple wave tank.
//!
//! A [`Domain`] is an immutable rectangular grid of `ny × nx` sample points
//! spread linearly over an [`Extent`]. It owns the coordinate meshes that
//! geometry generators and sources evaluate their predicates against.
//!
//! All grids use `(row, col)` indexing: rows follow the y axis (row 0 at
//! `ymin`), columns follow the x axis (column 0 at `xmin`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod region;

pub use domain::{Domain, Extent};
pub use error::SpaceError;
pub use region::Rect;
