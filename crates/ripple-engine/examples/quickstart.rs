//! Ripple Quickstart: a single-slit experiment from scratch.
//!
//! Demonstrates:
//!   1. Building a tank from a `TankConfig`
//!   2. Adding a wall with a slit and a plane-wave source
//!   3. Running for a span of simulated time
//!   4. Reading the output: step size, depth field, playback frames
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use ripple_core::Waveform;
use ripple_engine::{RippleTank, RunRequest, TankConfig, TankError};
use ripple_mask::MaskShape;
use ripple_source::SourceConfig;
use ripple_space::Rect;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TankError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut tank = RippleTank::new(TankConfig {
        boundary: "open".parse()?,
        ..TankConfig::default()
    })?;
    let dy = tank.domain().dy();

    // Plane wave along the top of the tank.
    tank.add_source(SourceConfig {
        footprint: Rect::new((-15.0, 15.0), (10.0, 11.0)),
        waveform: Waveform::Sine,
        frequency: 10.0,
        ..SourceConfig::default()
    })?;
    // One-cell-thick wall across y = 0 with a gap in the middle.
    tank.add_mask(MaskShape::single_slit((-15.0, 15.0), (0.0, dy), "x")?, None)?;

    let out = tank.run(RunRequest::duration(2.0, 0.5))?;

    println!("grid        {} x {}", tank.domain().nx(), tank.domain().ny());
    println!("dt          {:.6} s", out.dt);
    println!("snapshots   {}", out.steps());
    println!(
        "walls       {} cells",
        out.obstacles.iter().filter(|&&w| w).count()
    );
    println!("peak |u|    {:.4} {}", out.metrics.peak_amplitude, out.units);
    println!("run time    {} us", out.metrics.total_us);
    if let Some((lo, hi)) = out.display_range() {
        println!("colour range [{lo:.4}, {hi:.4}]");
    }

    let plan = out.default_playback();
    println!("playback    {} frames, every {} snapshots", plan.frames, plan.skip);
    for frame in (0..plan.frames).step_by(plan.frames.max(4) / 4) {
        let u = out.frame(plan.snapshot(frame)).map(|f| f[[25, 50]]).unwrap_or(0.0);
        println!("  {:>9}  u(0, -7.4) = {u:+.5}", plan.label(frame));
    }
    Ok(())
}
