//! Step-size policy.
//!
//! The default step is `alpha · min(dx, dy) / sqrt(g · depth)`. It can only
//! shrink afterwards: when a source oscillates faster than one step, and
//! when a timed run needs more frames than the current step allows.

/// Stable step size for open water of `depth`.
pub fn stable_dt(alpha: f64, min_spacing: f64, gravity: f64, depth: f64) -> f64 {
    alpha * min_spacing / (gravity * depth).sqrt()
}

/// Step size after attaching a source of `period`.
///
/// A period shorter than `dt` forces the step down to a tenth of that
/// period; otherwise `dt` is returned unchanged.
pub fn after_source(dt: f64, period: f64) -> f64 {
    if period < dt {
        0.1 * period
    } else {
        dt
    }
}

/// Step count and step size derived for a timed run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedPlan {
    /// Display frames requested: `round(fps · duration / speed)`.
    pub frames: u64,
    /// Step size used for the run, never larger than the input step.
    pub dt: f64,
    /// Number of snapshots to produce: `round(duration / dt)`.
    pub steps: usize,
}

/// Plan a run of `duration` time units shown at `fps` with playback
/// multiplier `speed`, starting from step size `dt`.
///
/// Inputs are assumed validated (finite and positive).
pub fn plan_timed(duration: f64, fps: f64, speed: f64, dt: f64) -> TimedPlan {
    let frames = (fps * duration / speed).round();
    let mut dt_out = dt;
    if frames >= 1.0 {
        let required = duration / frames;
        if required < dt_out {
            dt_out = required;
        }
    }
    TimedPlan {
        frames: frames as u64,
        dt: dt_out,
        steps: (duration / dt_out).round() as usize,
    }
}
