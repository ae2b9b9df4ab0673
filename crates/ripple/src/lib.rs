//! Ripple: a two-dimensional ripple tank simulator.
//!
//! Bundles the workspace crates behind one dependency: each sub-crate is
//! re-exported as a module, and [`prelude`] gathers the names a typical
//! tank setup needs.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let mut tank = RippleTank::new(TankConfig {
//!     nx: 40,
//!     ny: 40,
//!     boundary: BoundaryCondition::Closed,
//!     ..TankConfig::default()
//! })
//! .unwrap();
//! tank.add_source(SourceConfig {
//!     frequency: 10.0,
//!     ..SourceConfig::default()
//! })
//! .unwrap();
//! tank.add_mask(MaskShape::circle(0.0, 0.0, 8.0), None).unwrap();
//!
//! let out = tank.run(RunRequest::Steps(50)).unwrap();
//! assert_eq!(out.steps(), 50);
//! assert!(out.metrics.is_finite());
//! ```
//!
//! # Modules
//!
//! Types outside the prelude live in the per-crate modules:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Tags, ids, mask and source errors |
//! | [`space`] | `ripple-space` | `Domain`, `Extent`, `Rect` |
//! | [`mask`] | `ripple-mask` | Mask generators and the depth field |
//! | [`source`] | `ripple-source` | Waveforms, sources, and the source set |
//! | [`engine`] | `ripple-engine` | Tank, stencil, step policy, output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tags, identifiers, and subsystem errors (`ripple-core`).
pub use ripple_core as types;

/// The coordinate grid (`ripple-space`).
///
/// [`space::Domain`] is built once per tank and shared by masks and sources.
pub use ripple_space as space;

/// Obstacle and depth masks (`ripple-mask`).
///
/// [`mask::MaskShape`] lists the geometry generators;
/// [`mask::DepthField`] composes registered masks.
pub use ripple_mask as mask;

/// Forcing sources (`ripple-source`).
pub use ripple_source as source;

/// Time integration (`ripple-engine`).
///
/// [`engine::RippleTank`] is the entry point; [`engine::Stencil`] exposes
/// the leapfrog update for callers driving their own loop.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Tags and ids
    pub use ripple_core::{
        Axis, BoundaryCondition, Direction, MaskId, SourceId, Units, Waveform,
    };

    // Errors
    pub use ripple_core::{MaskError, SourceError, TagError};
    pub use ripple_engine::{ConfigError, TankError};
    pub use ripple_space::SpaceError;

    // Geometry
    pub use ripple_space::{Domain, Extent, Rect};

    // Masks and sources
    pub use ripple_mask::{DepthField, Mask, MaskShape};
    pub use ripple_source::{Source, SourceConfig, SourceSet};

    // Engine
    pub use ripple_engine::{
        PlaybackPlan, RippleTank, RunMetrics, RunRequest, SimulationOutput, TankConfig,
    };
}
