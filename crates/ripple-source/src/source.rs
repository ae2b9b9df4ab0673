//! A single forcing source bound to a grid region.

use crate::waveform::sample;
use ndarray::Array2;
use ripple_core::{SourceError, Waveform};
use ripple_space::{Domain, Rect};
use tracing::warn;

// ── SourceConfig ───────────────────────────────────────────────────

/// Parameters of a forcing source, before it is bound to a domain.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// Rectangular footprint in domain coordinates. Default: `(-0.5, 0.5)²`.
    pub footprint: Rect,
    /// Time profile. Default: [`Waveform::Sine`].
    pub waveform: Waveform,
    /// Oscillation frequency in hertz. Default: 1.
    pub frequency: f64,
    /// Phase offset in radians. Default: 0.
    pub phase: f64,
    /// Fraction of the base depth used as peak forcing, in `[0, 1]`.
    /// Default: 0.1.
    pub amplitude: f64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            footprint: Rect::centred(0.0, 0.0, 0.5),
            waveform: Waveform::Sine,
            frequency: 1.0,
            phase: 0.0,
            amplitude: 0.1,
        }
    }
}

impl SourceConfig {
    /// Check parameter ranges without touching a domain.
    pub fn validate(&self) -> Result<(), SourceError> {
        if !self.footprint.is_finite() {
            return Err(SourceError::InvalidFootprint {
                reason: format!(
                    "corners must be finite, got x {:?} y {:?}",
                    self.footprint.x, self.footprint.y
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(SourceError::InvalidAmplitude {
                value: self.amplitude,
            });
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SourceError::InvalidFrequency {
                value: self.frequency,
            });
        }
        if !self.phase.is_finite() {
            return Err(SourceError::InvalidPhase { value: self.phase });
        }
        Ok(())
    }
}

// ── Source ─────────────────────────────────────────────────────────

/// A validated source with its activation region resolved on a grid.
#[derive(Clone, Debug)]
pub struct Source {
    config: SourceConfig,
    region: Array2<bool>,
}

impl Source {
    /// Validate `config` and resolve its footprint on `domain`.
    ///
    /// A footprint that covers no cell is accepted with a warning; such a
    /// source never forces anything.
    pub fn new(domain: &Domain, config: SourceConfig) -> Result<Self, SourceError> {
        config.validate()?;
        let region = domain.footprint(&config.footprint);
        if !region.iter().any(|&c| c) {
            warn!(
                x = ?config.footprint.x,
                y = ?config.footprint.y,
                "source footprint covers no grid cell"
            );
        }
        Ok(Self { config, region })
    }

    /// The parameters this source was built from.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Cells driven by this source.
    pub fn region(&self) -> &Array2<bool> {
        &self.region
    }

    /// Number of driven cells.
    pub fn cell_count(&self) -> usize {
        self.region.iter().filter(|&&c| c).count()
    }

    /// Oscillation period `1 / frequency`.
    pub fn period(&self) -> f64 {
        1.0 / self.config.frequency
    }

    /// Scalar forcing at `step`, or `None` when nothing is imposed.
    ///
    /// `amplitude · depth · waveform(step · dt)`.
    pub fn value(&self, step: usize, dt: f64, depth: f64) -> Option<f64> {
        let c = &self.config;
        sample(c.waveform, step, step as f64 * dt, c.frequency, c.phase)
            .map(|w| w * c.amplitude * depth)
    }

    /// Full-grid forcing at `step`: [`value`](Source::value) inside the
    /// region, zero elsewhere (and zero everywhere when nothing is imposed).
    pub fn evaluate(&self, step: usize, dt: f64, depth: f64) -> Array2<f64> {
        let v = self.value(step, dt, depth).unwrap_or(0.0);
        self.region.mapv(|inside| if inside { v } else { 0.0 })
    }
}
