//! Benchmark scenarios for the Ripple wave tank.
//!
//! Each function builds one of the classic ripple-tank demonstrations as a
//! ready-to-run [`Scenario`]:
//!
//! - [`single_source`]: one 10 Hz point source in open water
//! - [`multiple_sources`]: two point sources at 10 Hz and 5 Hz
//! - [`half_circle`]: a point source in front of a semicircular reflector,
//!   closed borders
//! - [`single_slit`]: a plane wave diffracting through a slit
//! - [`breakwater`]: a long-period swell over a sloping bed with two
//!   breakwaters, in metres

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ndarray::Array2;
use ripple_core::{BoundaryCondition, Units, Waveform};
use ripple_engine::{RippleTank, RunRequest, TankConfig, TankError};
use ripple_mask::MaskShape;
use ripple_source::SourceConfig;
use ripple_space::Rect;

/// A configured tank together with the run it is meant for.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Short identifier, used as the benchmark id.
    pub name: &'static str,
    /// The configured tank.
    pub tank: RippleTank,
    /// The run to execute.
    pub request: RunRequest,
}

fn sine(footprint: Rect, frequency: f64) -> SourceConfig {
    SourceConfig {
        footprint,
        waveform: Waveform::Sine,
        frequency,
        ..SourceConfig::default()
    }
}

/// Classic tank, one centred 10 Hz source. Two time units at half speed.
pub fn single_source() -> Result<Scenario, TankError> {
    let mut tank = RippleTank::new(TankConfig::default())?;
    tank.add_source(sine(Rect::centred(0.0, 0.0, 0.5), 10.0))?;
    Ok(Scenario {
        name: "single_source",
        tank,
        request: RunRequest::duration(2.0, 0.5),
    })
}

/// Two one-cell sources at `(-5, 0)` and `(5, 0)`, 10 Hz and 5 Hz.
pub fn multiple_sources() -> Result<Scenario, TankError> {
    let mut tank = RippleTank::new(TankConfig::default())?;
    let (dx, dy) = (tank.domain().dx(), tank.domain().dy());
    tank.add_source(sine(Rect::new((-5.0 - dx, -5.0 + dx), (-dy, dy)), 10.0))?;
    tank.add_source(sine(Rect::new((5.0 - dx, 5.0 + dx), (-dy, dy)), 5.0))?;
    Ok(Scenario {
        name: "multiple_sources",
        tank,
        request: RunRequest::duration(2.0, 0.5),
    })
}

/// Closed tank, source at `(0, 10)`, lower half of a radius-6 ring
/// centred at `(0, -4)` removed so the upper arc faces the source.
pub fn half_circle() -> Result<Scenario, TankError> {
    let mut tank = RippleTank::new(TankConfig {
        boundary: BoundaryCondition::Closed,
        ..TankConfig::default()
    })?;
    let (dx, dy) = (tank.domain().dx(), tank.domain().dy());
    tank.add_source(sine(Rect::new((-dx, dx), (10.0 - dy, 10.0 + dy)), 10.0))?;
    let width = dx.hypot(dy);
    tank.add_mask(
        MaskShape::half_circle(0.0, -4.0, 6.0, width, "x", "lower")?,
        None,
    )?;
    Ok(Scenario {
        name: "half_circle",
        tank,
        request: RunRequest::duration(2.0, 0.5),
    })
}

/// Plane wave from a band at `y ∈ [10, 11]` hitting a one-row wall at
/// `y = 0` with a default-width slit.
pub fn single_slit() -> Result<Scenario, TankError> {
    let mut tank = RippleTank::new(TankConfig::default())?;
    let dy = tank.domain().dy();
    tank.add_source(sine(Rect::new((-15.0, 15.0), (10.0, 11.0)), 10.0))?;
    tank.add_mask(MaskShape::single_slit((-15.0, 15.0), (0.0, dy), "x")?, None)?;
    Ok(Scenario {
        name: "single_slit",
        tank,
        request: RunRequest::duration(2.0, 0.5),
    })
}

/// A 100 m square harbour: swell with a 7.5 s period entering from the
/// north, two breakwaters, and a bed rising linearly toward the south.
pub fn breakwater() -> Result<Scenario, TankError> {
    let mut tank = RippleTank::new(TankConfig {
        x_range: (-50.0, 50.0),
        y_range: (-50.0, 50.0),
        units: Units::M,
        ..TankConfig::default()
    })?;
    tank.add_source(sine(Rect::new((-50.0, 50.0), (25.0, 30.0)), 2.0 / 15.0))?;
    tank.add_mask(MaskShape::rectangle((0.0, 3.0), (-50.0, -20.0)), None)?;
    tank.add_mask(MaskShape::rectangle((25.0, 28.0), (-50.0, -20.0)), None)?;
    let (ny, nx) = tank.domain().shape();
    let slope = Array2::from_shape_fn((ny, nx), |(r, _)| r as f64 / (ny - 1) as f64);
    tank.add_mask_array(slope, None)?;
    Ok(Scenario {
        name: "breakwater",
        tank,
        request: RunRequest::duration(60.0, 10.0),
    })
}

/// Every scenario, in the order listed above.
pub fn all_scenarios() -> Result<Vec<Scenario>, TankError> {
    Ok(vec![
        single_source()?,
        multiple_sources()?,
        half_circle()?,
        single_slit()?,
        breakwater()?,
    ])
}
