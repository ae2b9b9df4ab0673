//! Depth and obstacle masks for the Ripple wave tank.
//!
//! A mask is a per-cell multiplier in `[0, 1]` over the tank grid: `1` is
//! open water, `0` a wall, anything between a shallower bed. Masks come
//! from one of a closed set of [`MaskShape`] generators or from a raw
//! array, and a [`DepthField`] composes every registered mask into one
//! effective relative-depth field by elementwise product.
//!
//! # Composition
//!
//! Registering or removing masks does not touch the composed field. The
//! owner calls [`DepthField::recompose`] once the mask set is final; the
//! call is idempotent and also refreshes the masked depth and the baseline
//! propagation speed `sqrt(g · depth)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod shape;

pub use field::{DepthField, Mask};
pub use shape::MaskShape;
