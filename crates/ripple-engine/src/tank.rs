//! The ripple tank: configuration, masks, sources, and runs.

use std::time::Instant;

use ndarray::{s, Array2, Array3, Axis};
use ripple_core::{BoundaryCondition, MaskId, SourceId};
use ripple_mask::{DepthField, Mask, MaskShape};
use ripple_source::{Source, SourceConfig, SourceSet};
use ripple_space::Domain;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, TankConfig, TankError};
use crate::metrics::RunMetrics;
use crate::output::SimulationOutput;
use crate::run::RunRequest;
use crate::stencil::Stencil;
use crate::step;

/// A configured tank ready to run.
///
/// Every mutating call validates its input completely before touching any
/// state; on error the tank is exactly as it was.
///
/// # Examples
///
/// ```
/// use ripple_engine::{RippleTank, RunRequest, TankConfig};
/// use ripple_source::SourceConfig;
///
/// let mut tank = RippleTank::new(TankConfig {
///     nx: 30,
///     ny: 30,
///     ..TankConfig::default()
/// })
/// .unwrap();
/// tank.add_source(SourceConfig { frequency: 10.0, ..SourceConfig::default() }).unwrap();
/// let out = tank.run(RunRequest::Steps(20)).unwrap();
/// assert_eq!(out.steps(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct RippleTank {
    config: TankConfig,
    domain: Domain,
    depth: DepthField,
    sources: SourceSet,
    dt: f64,
}

impl RippleTank {
    /// Validate `config` and build an empty tank of open water.
    ///
    /// The step size starts at `alpha · min(dx, dy) / sqrt(g · depth)`.
    pub fn new(config: TankConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let domain = config.domain()?;
        let gravity = config.gravity();
        let dt = step::stable_dt(config.alpha, domain.min_spacing(), gravity, config.depth);
        let depth = DepthField::new(&domain, config.depth, gravity);
        let sources = SourceSet::new(domain.shape());
        debug!(
            nx = domain.nx(),
            ny = domain.ny(),
            dx = domain.dx(),
            dy = domain.dy(),
            dt,
            boundary = %config.boundary,
            units = %config.units,
            "tank configured"
        );
        Ok(Self {
            config,
            domain,
            depth,
            sources,
            dt,
        })
    }

    /// The configuration this tank was built from.
    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    /// The grid.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Registered masks and their composition.
    pub fn depth_field(&self) -> &DepthField {
        &self.depth
    }

    /// Registered sources.
    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    /// Current step size.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Gravitational constant in the tank's units.
    pub fn gravity(&self) -> f64 {
        self.config.gravity()
    }

    /// Border treatment.
    pub fn boundary(&self) -> BoundaryCondition {
        self.config.boundary
    }

    /// Override the step size.
    pub fn set_dt(&mut self, dt: f64) -> Result<(), ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::InvalidDt { value: dt });
        }
        self.dt = dt;
        Ok(())
    }

    // ── masks ───────────────────────────────────────────────────

    /// Generate a mask from `shape` and register it.
    ///
    /// `rel_deep` turns the mask's walls into a shallower bed of that
    /// relative depth.
    pub fn add_mask(
        &mut self,
        shape: MaskShape,
        rel_deep: Option<f64>,
    ) -> Result<MaskId, TankError> {
        let mask = Mask::build(&self.domain, &shape, rel_deep)?;
        self.insert_mask(mask)
    }

    /// Register a precomputed relative-depth array.
    pub fn add_mask_array(
        &mut self,
        values: Array2<f64>,
        rel_deep: Option<f64>,
    ) -> Result<MaskId, TankError> {
        let mask = Mask::from_array(&self.domain, values, rel_deep)?;
        self.insert_mask(mask)
    }

    /// Register a mask built elsewhere.
    pub fn insert_mask(&mut self, mask: Mask) -> Result<MaskId, TankError> {
        let kind = mask.kind();
        let id = self.depth.insert(mask)?;
        self.depth.recompose();
        debug!(%id, kind, "mask added");
        Ok(id)
    }

    /// Remove a mask and recompose.
    pub fn remove_mask(&mut self, id: MaskId) -> Result<Mask, TankError> {
        let mask = self.depth.remove(id)?;
        self.depth.recompose();
        Ok(mask)
    }

    /// Remove every mask.
    pub fn clear_masks(&mut self) {
        self.depth.clear();
        self.depth.recompose();
    }

    // ── sources ─────────────────────────────────────────────────

    /// Validate and register a source.
    ///
    /// A source whose period is shorter than the current step forces the
    /// step down to a tenth of that period.
    pub fn add_source(&mut self, config: SourceConfig) -> Result<SourceId, TankError> {
        let source = Source::new(&self.domain, config)?;
        let period = source.period();
        let dt = step::after_source(self.dt, period);
        if dt < self.dt {
            warn!(period, old = self.dt, new = dt, "source period below step size, shrinking step");
            self.dt = dt;
        }
        Ok(self.sources.add(source))
    }

    // ── runs ────────────────────────────────────────────────────

    /// Execute `request` and return the full time series.
    ///
    /// A timed request may shrink the tank's step size; the new step
    /// persists for later runs.
    pub fn run(&mut self, request: RunRequest) -> Result<SimulationOutput, ConfigError> {
        request.validate()?;
        let steps = match request {
            RunRequest::Steps(n) => n,
            RunRequest::Duration {
                duration,
                fps,
                speed,
            } => {
                let plan = step::plan_timed(duration, fps, speed, self.dt);
                if plan.dt < self.dt {
                    warn!(
                        frames = plan.frames,
                        old = self.dt,
                        new = plan.dt,
                        "frame rate needs a finer step, shrinking step"
                    );
                    self.dt = plan.dt;
                }
                plan.steps
            }
        };
        Ok(self.simulate(steps, request))
    }

    /// Produce `steps` snapshots with the current step size.
    pub fn simulate_steps(&self, steps: usize) -> SimulationOutput {
        self.simulate(steps, RunRequest::Steps(steps))
    }

    /// Simulate `duration` time units for display at `fps` and playback
    /// multiplier `speed`.
    pub fn simulate_time(
        &mut self,
        duration: f64,
        speed: f64,
        fps: f64,
    ) -> Result<SimulationOutput, ConfigError> {
        self.run(RunRequest::Duration {
            duration,
            fps,
            speed,
        })
    }

    fn stencil(&self) -> Stencil {
        Stencil {
            dt: self.dt,
            dx: self.domain.dx(),
            dy: self.domain.dy(),
            gravity: self.gravity(),
            boundary: self.config.boundary,
        }
    }

    fn simulate(&self, steps: usize, request: RunRequest) -> SimulationOutput {
        debug_assert!(!self.depth.is_stale());
        let start = Instant::now();
        let (ny, nx) = self.domain.shape();
        let base = self.config.depth;
        let dt = self.dt;
        let stencil = self.stencil();
        let masked = self.depth.masked_depth();
        let mut amplitude = Array3::zeros((steps, ny, nx));
        let mut metrics = RunMetrics {
            steps,
            dt,
            ..RunMetrics::default()
        };
        info!(
            steps,
            dt,
            sources = self.sources.len(),
            masks = self.depth.len(),
            "run started"
        );

        if steps > 0 {
            let mut u0 = amplitude.index_axis_mut(Axis(0), 0);
            u0.assign(&self.sources.evaluate(0, dt, base));
            metrics.observe(0, u0.iter());
        }
        if steps > 1 {
            let (u0, mut u1) = amplitude.multi_slice_mut((s![0, .., ..], s![1, .., ..]));
            stencil.bootstrap(masked, u0.view(), u1.view_mut());
            self.sources.forcing(1, dt, base).apply(u1.view_mut());
            metrics.observe(1, u1.iter());
        }
        for i in 1..steps.saturating_sub(1) {
            let (prev, cur, mut next) = amplitude.multi_slice_mut((
                s![i - 1, .., ..],
                s![i, .., ..],
                s![i + 1, .., ..],
            ));
            stencil.advance(masked, prev.view(), cur.view(), next.view_mut());
            if !self.sources.is_empty() {
                self.sources.forcing(i + 1, dt, base).apply(next.view_mut());
            }
            metrics.observe(i + 1, next.iter());
        }

        metrics.total_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        if let Some(step) = metrics.first_non_finite_step {
            warn!(step, dt, "amplitude became non-finite; step size is likely unstable");
        }
        info!(
            steps,
            dt,
            peak = metrics.peak_amplitude,
            elapsed_us = metrics.total_us,
            "run finished"
        );

        SimulationOutput {
            amplitude,
            dt,
            extent: self.domain.extent(),
            dx: self.domain.dx(),
            dy: self.domain.dy(),
            base_depth: base,
            units: self.config.units,
            relative_depth: self.depth.relative_depth().clone(),
            masked_depth: masked.clone(),
            obstacles: self.depth.obstacles(),
            request,
            metrics,
        }
    }
}
