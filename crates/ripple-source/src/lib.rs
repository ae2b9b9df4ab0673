//! Forcing sources for the Ripple wave tank.
//!
//! A [`Source`] binds a [`Waveform`](ripple_core::Waveform) to a
//! rectangular activation region of the grid. A [`SourceSet`] holds every
//! registered source and evaluates their combined forcing at a step index,
//! together with the cells that the integrator must hard-clamp at that step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod set;
pub mod source;
pub mod waveform;

pub use set::{Forcing, SourceSet};
pub use source::{Source, SourceConfig};
pub use waveform::sample;
