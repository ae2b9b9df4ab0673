//! Run requests.

use crate::config::ConfigError;

/// What a call to [`RippleTank::run`](crate::RippleTank::run) should produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunRequest {
    /// Produce exactly this many snapshots with the current step size.
    Steps(usize),
    /// Simulate `duration` time units for display at `fps` frames per
    /// second and playback multiplier `speed`.
    ///
    /// The step size shrinks if the requested frame count needs it.
    Duration {
        /// Simulated time span.
        duration: f64,
        /// Display frame rate.
        fps: f64,
        /// Playback speed multiplier.
        speed: f64,
    },
}

impl Default for RunRequest {
    fn default() -> Self {
        Self::Steps(100)
    }
}

impl RunRequest {
    /// Timed request with the usual 24 frames per second.
    pub fn duration(duration: f64, speed: f64) -> Self {
        Self::Duration {
            duration,
            fps: 24.0,
            speed,
        }
    }

    /// Check that every parameter of a timed request is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Self::Duration {
            duration,
            fps,
            speed,
        } = *self
        {
            for (name, value) in [("duration", duration), ("fps", fps), ("speed", speed)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::InvalidRunRequest {
                        reason: format!("{name} must be finite and positive, got {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_hundred_steps() {
        assert_eq!(RunRequest::default(), RunRequest::Steps(100));
    }

    #[test]
    fn step_requests_always_validate() {
        assert!(RunRequest::Steps(0).validate().is_ok());
    }

    #[test]
    fn timed_request_rejects_bad_parameters() {
        let bad = [
            RunRequest::duration(0.0, 1.0),
            RunRequest::duration(1.0, -1.0),
            RunRequest::Duration {
                duration: 1.0,
                fps: f64::NAN,
                speed: 1.0,
            },
        ];
        for req in bad {
            match req.validate() {
                Err(ConfigError::InvalidRunRequest { .. }) => {}
                other => panic!("expected InvalidRunRequest, got {other:?}"),
            }
        }
        assert!(RunRequest::duration(2.0, 0.5).validate().is_ok());
    }
}
