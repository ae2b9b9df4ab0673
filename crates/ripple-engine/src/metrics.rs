//! Per-run metrics.
//!
//! [`RunMetrics`] records timing and the numerical health of a run. A
//! blow-up from an unstable step size shows up here as a large
//! `peak_amplitude` or a `first_non_finite_step`; the amplitude itself is
//! never clamped.

/// Metrics collected during a single run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Wall-clock time for the whole run, in microseconds.
    pub total_us: u64,
    /// Number of snapshots produced.
    pub steps: usize,
    /// Step size used.
    pub dt: f64,
    /// Largest finite `|u|` over every snapshot.
    pub peak_amplitude: f64,
    /// Index of the first snapshot holding a NaN or infinite value.
    pub first_non_finite_step: Option<usize>,
}

impl RunMetrics {
    /// Whether the run stayed finite throughout.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite_step.is_none()
    }

    /// Fold one snapshot into the running peak and finiteness check.
    pub(crate) fn observe<'a>(&mut self, step: usize, values: impl IntoIterator<Item = &'a f64>) {
        let mut finite = true;
        for &v in values {
            if v.is_finite() {
                self.peak_amplitude = self.peak_amplitude.max(v.abs());
            } else {
                finite = false;
            }
        }
        if !finite && self.first_non_finite_step.is_none() {
            self.first_non_finite_step = Some(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.steps, 0);
        assert_eq!(m.peak_amplitude, 0.0);
        assert!(m.is_finite());
    }

    #[test]
    fn observe_tracks_peak_and_first_blow_up() {
        let mut m = RunMetrics::default();
        m.observe(0, &[0.5, -2.0]);
        m.observe(1, &[f64::NAN, 1.0]);
        m.observe(2, &[f64::INFINITY, 3.0]);
        assert_eq!(m.peak_amplitude, 3.0);
        assert_eq!(m.first_non_finite_step, Some(1));
        assert!(!m.is_finite());
    }
}
