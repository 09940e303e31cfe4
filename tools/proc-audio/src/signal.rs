//! Ambient tone signal model
//!
//! Builds the raw (un-enveloped) waveform for the ambient loop as a weighted
//! sum of sine components: a three-partial chord plus two sub-mix layers.

use std::f64::consts::PI;

/// One sinusoidal component: a frequency and its linear mix weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Frequency in Hz
    pub frequency: f64,
    /// Linear amplitude weight
    pub weight: f64,
}

impl Partial {
    /// Create a partial from a frequency in Hz and an amplitude weight
    pub const fn new(frequency: f64, weight: f64) -> Self {
        Self { frequency, weight }
    }

    /// Sample this partial at time `t` in seconds
    pub fn sample(&self, t: f64) -> f64 {
        (2.0 * PI * self.frequency * t).sin() * self.weight
    }
}

/// Signal model for the ambient pad.
///
/// The tone is a fundamental with its 2nd and 3rd harmonics, weighted to
/// emphasize the fundamental, plus two additive layers:
/// - `slow_pulse`: a sub-audio sine giving the pad a ~10 second breathing
///   swell in overall level
/// - `shimmer`: a quiet tremolo-rate sine layered on top
///
/// These fields are the entire creative surface of the sound; tweak them
/// here rather than in the render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientTone {
    /// Harmonic stack of the base tone
    pub partials: [Partial; 3],
    /// Sub-audio level swell (additive, not a multiplier)
    pub slow_pulse: Partial,
    /// Tremolo-rate top layer
    pub shimmer: Partial,
}

impl Default for AmbientTone {
    fn default() -> Self {
        Self {
            partials: [
                Partial::new(220.0, 0.4),
                Partial::new(440.0, 0.25),
                Partial::new(660.0, 0.1),
            ],
            slow_pulse: Partial::new(0.1, 0.2),
            shimmer: Partial::new(6.0, 0.05),
        }
    }
}

impl AmbientTone {
    /// Instantaneous amplitude at time `t` in seconds, before any envelope.
    ///
    /// Pure and total over `t >= 0`; the result is roughly within -1.0 to
    /// 1.0 for the default weights but is not guaranteed bounded. The
    /// renderer clips before quantizing.
    pub fn sample(&self, t: f64) -> f64 {
        let base: f64 = self.partials.iter().map(|p| p.sample(t)).sum();
        base + self.slow_pulse.sample(t) + self.shimmer.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sample() {
        // sin(2π · 1.0 · 0.25) = sin(π/2) = 1, scaled by the weight
        let p = Partial::new(1.0, 0.5);
        assert!((p.sample(0.25) - 0.5).abs() < 1e-9);
        assert!(p.sample(0.0).abs() < 1e-9);
    }

    #[test]
    fn test_silent_at_t_zero() {
        // All components are sines, so the waveform starts at exactly zero
        let tone = AmbientTone::default();
        assert_eq!(tone.sample(0.0), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let tone = AmbientTone::default();
        for i in 0..100 {
            let t = i as f64 * 0.0137;
            assert_eq!(tone.sample(t), tone.sample(t));
        }
    }

    #[test]
    fn test_default_weights_stay_musically_bounded() {
        // Worst case is the sum of all weights (0.4 + 0.25 + 0.1 + 0.2 + 0.05)
        let tone = AmbientTone::default();
        for i in 0..10_000 {
            let t = i as f64 / 1_000.0;
            assert!(tone.sample(t).abs() <= 1.0 + 1e-9);
        }
    }
}
