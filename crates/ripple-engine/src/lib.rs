//! Time integration for the Ripple wave tank.
//!
//! [`RippleTank`] owns a domain, its depth field and its sources, and
//! advances the wave height with an explicit leapfrog scheme:
//!
//! ```text
//! u[i+1] = 2·u[i] − u[i−1] + rx·δx²u[i] + ry·δy²u[i]
//! rx = (c·Δt/Δx)²,  ry = (c·Δt/Δy)²,  c = sqrt(g·(h + u[i]))
//! ```
//!
//! Source cells are hard-clamped to their forcing value after every step.
//! A run returns the full time series as a [`SimulationOutput`].
//!
//! Mutating the tank between runs is supported; mutating masks or sources
//! from inside a run is not possible since a run borrows the tank.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod output;
pub mod run;
pub mod stencil;
pub mod step;
pub mod tank;

pub use config::{ConfigError, TankConfig, TankError};
pub use metrics::RunMetrics;
pub use output::{PlaybackPlan, SimulationOutput};
pub use run::RunRequest;
pub use stencil::Stencil;
pub use tank::RippleTank;
