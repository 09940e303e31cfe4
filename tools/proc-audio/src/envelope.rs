//! Fade envelope for loopable sounds
//!
//! Shapes the overall level of a render so the loop starts and ends softly
//! instead of clicking at the seam.

/// Linear fade-in/fade-out gain envelope with an audible floor.
///
/// Gain ramps up over the first `fade_in_secs`, holds at 1.0 through the
/// middle, and ramps back down over the final `fade_out_secs`. The result
/// never drops below `floor`, so consecutive loop plays don't leave a hard
/// zero-amplitude gap at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEnvelope {
    /// Seconds to ramp from the floor up to full gain at the start
    pub fade_in_secs: f64,
    /// Seconds to ramp back down at the end
    pub fade_out_secs: f64,
    /// Minimum gain (0.0 to 1.0); keeps the head/tail from going fully silent
    pub floor: f64,
}

impl Default for FadeEnvelope {
    fn default() -> Self {
        Self {
            fade_in_secs: 3.0,
            fade_out_secs: 3.0,
            floor: 0.05,
        }
    }
}

impl FadeEnvelope {
    /// Create an envelope with custom ramp times and floor
    pub fn new(fade_in_secs: f64, fade_out_secs: f64, floor: f64) -> Self {
        Self {
            fade_in_secs,
            fade_out_secs,
            floor: floor.clamp(0.0, 1.0),
        }
    }

    /// Gain at `t` seconds into a sound lasting `duration` seconds.
    ///
    /// Returns a value in `(0.0, 1.0]` for any `t` in `[0, duration)`.
    pub fn gain(&self, t: f64, duration: f64) -> f64 {
        let fade_in = (t / self.fade_in_secs).min(1.0);
        let fade_out = ((duration - t) / self.fade_out_secs).min(1.0);
        (fade_in * fade_out).max(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: f64 = 24.0;

    #[test]
    fn test_floor_at_start() {
        let env = FadeEnvelope::default();
        assert_eq!(env.gain(0.0, DURATION), 0.05);
    }

    #[test]
    fn test_full_gain_mid_loop() {
        // Both ramps are saturated at 1.0 in the middle region
        let env = FadeEnvelope::default();
        assert_eq!(env.gain(12.0, DURATION), 1.0);
        assert_eq!(env.gain(3.0, DURATION), 1.0);
        assert_eq!(env.gain(21.0, DURATION), 1.0);
    }

    #[test]
    fn test_ramps_are_linear() {
        let env = FadeEnvelope::default();
        assert!((env.gain(1.5, DURATION) - 0.5).abs() < 1e-12);
        assert!((env.gain(22.5, DURATION) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_never_below_floor() {
        let env = FadeEnvelope::default();
        for i in 0..24_000 {
            let t = i as f64 / 1_000.0;
            let g = env.gain(t, DURATION);
            assert!(g >= 0.05, "gain {g} below floor at t={t}");
            assert!(g <= 1.0, "gain {g} above unity at t={t}");
        }
    }

    #[test]
    fn test_custom_floor_is_clamped() {
        let env = FadeEnvelope::new(3.0, 3.0, 2.0);
        assert_eq!(env.floor, 1.0);
    }
}
