//! Simulation output and playback metadata.
//!
//! Everything a renderer needs to draw frames and label them with elapsed
//! time, without re-deriving simulation internals.

use ndarray::{Array2, Array3, ArrayView2, Axis};
use ripple_core::Units;
use ripple_space::Extent;

use crate::metrics::RunMetrics;
use crate::run::RunRequest;

// ── SimulationOutput ───────────────────────────────────────────────

/// The time series produced by one run plus its metadata.
#[derive(Clone, Debug)]
pub struct SimulationOutput {
    /// Wave height, shape `(steps, ny, nx)`.
    pub amplitude: Array3<f64>,
    /// Step size used for the run.
    pub dt: f64,
    /// Bounding extent of the grid.
    pub extent: Extent,
    /// Column spacing.
    pub dx: f64,
    /// Row spacing.
    pub dy: f64,
    /// Depth of open water.
    pub base_depth: f64,
    /// Length unit of every spatial quantity.
    pub units: Units,
    /// Composed relative depth in `[0, 1]`.
    pub relative_depth: Array2<f64>,
    /// `relative_depth · base_depth`.
    pub masked_depth: Array2<f64>,
    /// Cells fully blocked by a wall; renderers paint these out.
    pub obstacles: Array2<bool>,
    /// The request that produced this output.
    pub request: RunRequest,
    /// Timing and numerical health.
    pub metrics: RunMetrics,
}

impl SimulationOutput {
    /// Number of snapshots.
    pub fn steps(&self) -> usize {
        self.amplitude.len_of(Axis(0))
    }

    /// Whether the run produced no snapshot.
    pub fn is_empty(&self) -> bool {
        self.steps() == 0
    }

    /// Wave height at snapshot `i`.
    pub fn frame(&self, i: usize) -> Option<ArrayView2<'_, f64>> {
        (i < self.steps()).then(|| self.amplitude.index_axis(Axis(0), i))
    }

    /// Elapsed simulated time at snapshot `i`.
    pub fn frame_time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// Wave height plus the masked depth at every snapshot: the water
    /// surface seen from the tank floor.
    pub fn complete(&self) -> Array3<f64> {
        &self.amplitude + &self.masked_depth
    }

    /// Default colour-scale range.
    ///
    /// With only open water and walls, `[min u + depth, max u + depth]`;
    /// with any graded bed, the range of [`complete`](Self::complete).
    /// `None` for an empty run.
    pub fn display_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let binary = self.relative_depth.iter().all(|&v| v == 0.0 || v == 1.0);
        if binary {
            let (lo, hi) = min_max(self.amplitude.iter().copied());
            Some((lo + self.base_depth, hi + self.base_depth))
        } else {
            Some(min_max(self.complete().iter().copied()))
        }
    }

    /// Frame selection for playback at `fps` over `duration` with
    /// multiplier `speed`.
    pub fn playback(&self, fps: f64, duration: f64, speed: f64) -> PlaybackPlan {
        PlaybackPlan::new(self.steps(), self.dt, fps, duration, speed)
    }

    /// Frame selection using the parameters of the originating request, or
    /// 24 fps over 10 time units at unit speed for a step-count request.
    pub fn default_playback(&self) -> PlaybackPlan {
        match self.request {
            RunRequest::Duration {
                duration,
                fps,
                speed,
            } => self.playback(fps, duration, speed),
            RunRequest::Steps(_) => self.playback(24.0, 10.0, 1.0),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

// ── PlaybackPlan ───────────────────────────────────────────────────

/// Which snapshots to show and what time to print on each.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackPlan {
    /// Snapshot stride between displayed frames. At least 1.
    pub skip: usize,
    /// Number of displayed frames: `steps / skip`.
    pub frames: usize,
    /// Step size of the underlying run.
    pub dt: f64,
}

impl PlaybackPlan {
    /// `skip = max(1, round(speed · steps / (fps · duration)))`.
    pub fn new(steps: usize, dt: f64, fps: f64, duration: f64, speed: f64) -> Self {
        let raw = (speed * steps as f64 / (fps * duration)).round();
        let skip = if raw.is_finite() && raw >= 1.0 {
            raw as usize
        } else {
            1
        };
        Self {
            skip,
            frames: steps / skip,
            dt,
        }
    }

    /// Snapshot index shown at display frame `frame`.
    pub fn snapshot(&self, frame: usize) -> usize {
        frame * self.skip
    }

    /// Elapsed simulated time at display frame `frame`.
    pub fn elapsed(&self, frame: usize) -> f64 {
        self.snapshot(frame) as f64 * self.dt
    }

    /// Time label for display frame `frame`, e.g. `"0.125 s"`.
    pub fn label(&self, frame: usize) -> String {
        format!("{:.3} s", self.elapsed(frame))
    }
}
