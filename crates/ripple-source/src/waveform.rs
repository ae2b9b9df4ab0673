//! Pure waveform evaluation.

use ripple_core::Waveform;
use std::f64::consts::TAU;

/// Unit-amplitude value of `waveform` at `step` (time `t`).
///
/// Returns `None` when the waveform imposes nothing at this step, which
/// only happens for [`Waveform::Drop`] after step 0.
///
/// ```
/// use ripple_core::Waveform;
/// use ripple_source::sample;
///
/// assert_eq!(sample(Waveform::Drop, 0, 0.0, 1.0, 0.0), Some(-1.0));
/// assert_eq!(sample(Waveform::Drop, 3, 0.3, 1.0, 0.0), None);
/// assert_eq!(sample(Waveform::Square, 1, 0.1, 1.0, 0.0), Some(1.0));
/// ```
pub fn sample(waveform: Waveform, step: usize, t: f64, frequency: f64, phase: f64) -> Option<f64> {
    match waveform {
        Waveform::Drop => (step == 0).then_some(-1.0),
        Waveform::Sine => Some(sine(t, frequency, phase)),
        Waveform::Square => {
            let s = sine(t, frequency, phase);
            Some(if s > 0.0 {
                1.0
            } else if s < 0.0 {
                -1.0
            } else {
                0.0
            })
        }
    }
}

fn sine(t: f64, frequency: f64, phase: f64) -> f64 {
    (TAU * frequency * t + phase).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn drop_is_an_impulse() {
        assert_eq!(sample(Waveform::Drop, 0, 0.0, 7.0, 1.0), Some(-1.0));
        for step in 1..10 {
            assert_eq!(sample(Waveform::Drop, step, step as f64 * 0.01, 7.0, 1.0), None);
        }
    }

    #[test]
    fn square_is_zero_where_sine_is_zero() {
        assert_eq!(sample(Waveform::Square, 0, 0.0, 3.0, 0.0), Some(0.0));
        assert_eq!(sample(Waveform::Sine, 0, 0.0, 3.0, 0.0), Some(0.0));
    }

    #[test]
    fn square_follows_sine_sign() {
        // quarter and three-quarter period
        assert_eq!(sample(Waveform::Square, 1, 0.25, 1.0, 0.0), Some(1.0));
        assert_eq!(sample(Waveform::Square, 3, 0.75, 1.0, 0.0), Some(-1.0));
    }

    proptest! {
        #[test]
        fn sine_matches_formula(
            freq in 0.01f64..50.0,
            phase in -10.0f64..10.0,
            step in 0usize..10_000,
            dt in 1e-5f64..0.1,
        ) {
            let t = step as f64 * dt;
            let got = sample(Waveform::Sine, step, t, freq, phase).unwrap();
            let want = (2.0 * std::f64::consts::PI * freq * t + phase).sin();
            prop_assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }

        #[test]
        fn square_is_sign_of_sine(
            freq in 0.01f64..50.0,
            phase in -10.0f64..10.0,
            t in 0.0f64..100.0,
        ) {
            let s = sample(Waveform::Sine, 1, t, freq, phase).unwrap();
            let q = sample(Waveform::Square, 1, t, freq, phase).unwrap();
            prop_assert!(q == 1.0 || q == -1.0 || q == 0.0);
            prop_assert!(q * s >= 0.0);
        }
    }
}
