//! Runs every demonstration scenario and prints a one-line summary each.
//!
//! Run with: `cargo run --release --example scenarios -p ripple-bench`
//!
//! Set `RUST_LOG=debug` for per-mutation logging.

use ripple_bench::all_scenarios;
use ripple_engine::TankError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TankError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== Ripple Tank Scenarios ===\n");
    for scenario in all_scenarios()? {
        let mut tank = scenario.tank;
        let out = tank.run(scenario.request)?;
        let range = out
            .display_range()
            .map(|(lo, hi)| format!("[{lo:+.4}, {hi:+.4}]"))
            .unwrap_or_else(|| "n/a".into());
        println!(
            "{:<18} steps={:<6} dt={:.3e} peak={:.4} range={} finite={} ({} ms)",
            scenario.name,
            out.steps(),
            out.dt,
            out.metrics.peak_amplitude,
            range,
            out.metrics.is_finite(),
            out.metrics.total_us / 1000,
        );
    }
    Ok(())
}
