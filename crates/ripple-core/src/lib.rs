//! Core types for the Ripple wave tank.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: the enumerated
//! configuration tags, registry identifiers, and the per-subsystem error
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod tag;

pub use error::{MaskError, SourceError, TagError};
pub use id::{MaskId, SourceId};
pub use tag::{Axis, BoundaryCondition, Direction, Units, Waveform};
