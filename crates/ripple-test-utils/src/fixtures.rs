//! Canonical tanks for tests.

use ripple_core::{BoundaryCondition, Waveform};
use ripple_engine::{RippleTank, TankConfig};
use ripple_source::SourceConfig;
use ripple_space::Rect;

/// Amplitude fraction used by the fixture sources.
pub const FIXTURE_AMPLITUDE: f64 = 0.1;

/// The classic 100×100 tank over `(-15, 15)²`, open borders, cm units.
pub fn classic_config() -> TankConfig {
    TankConfig::default()
}

/// A sine source of `frequency` on the default centred footprint.
pub fn centre_sine(frequency: f64) -> SourceConfig {
    SourceConfig {
        waveform: Waveform::Sine,
        frequency,
        amplitude: FIXTURE_AMPLITUDE,
        ..SourceConfig::default()
    }
}

/// Classic tank with one centred sine source.
pub fn classic_tank(frequency: f64) -> RippleTank {
    let mut tank = RippleTank::new(classic_config()).expect("classic config is valid");
    tank.add_source(centre_sine(frequency))
        .expect("centre source is valid");
    tank
}

/// Square closed tank of `n × n` cells over `(-h, h)²` with spacing 0.5
/// and a centred sine source covering the middle 3×3 cells.
///
/// `n` must be odd so the centre falls on a cell.
pub fn closed_square_tank(n: usize, frequency: f64) -> RippleTank {
    assert!(n % 2 == 1, "odd cell count keeps the centre on a cell");
    let half = 0.25 * (n - 1) as f64;
    let mut tank = RippleTank::new(TankConfig {
        x_range: (-half, half),
        y_range: (-half, half),
        nx: n,
        ny: n,
        boundary: BoundaryCondition::Closed,
        ..TankConfig::default()
    })
    .expect("closed square config is valid");
    tank.add_source(SourceConfig {
        footprint: Rect::centred(0.0, 0.0, 0.5),
        ..centre_sine(frequency)
    })
    .expect("centre source is valid");
    tank
}
