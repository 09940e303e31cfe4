//! Render loop: drives the signal model across the full duration and
//! quantizes each amplitude to PCM i16.

use crate::envelope::FadeEnvelope;
use crate::signal::AmbientTone;

/// Fixed parameters for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Length of the rendered loop in seconds
    pub duration_secs: f64,
}

impl RenderConfig {
    /// Create a render configuration
    pub fn new(sample_rate: u32, duration_secs: f64) -> Self {
        Self {
            sample_rate,
            duration_secs,
        }
    }

    /// Total number of frames a render produces
    pub fn frame_count(&self) -> usize {
        (self.duration_secs * self.sample_rate as f64).round() as usize
    }
}

/// Render the tone through the envelope to PCM i16 samples.
///
/// Each frame is computed independently from its index: `t = i / sample_rate`,
/// amplitude = `tone.sample(t) * envelope.gain(t, duration)`, clipped to
/// -1.0..1.0 and scaled to the i16 range. No state is carried between frames,
/// so the output is a pure function of the arguments.
pub fn render(tone: &AmbientTone, envelope: &FadeEnvelope, config: &RenderConfig) -> Vec<i16> {
    let frames = config.frame_count();
    let mut samples = Vec::with_capacity(frames);

    for i in 0..frames {
        let t = i as f64 / config.sample_rate as f64;
        let raw = tone.sample(t) * envelope.gain(t, config.duration_secs);
        let clipped = raw.clamp(-1.0, 1.0);
        // `as` truncates toward zero; the reference renders quantize the
        // same way, so keep it for byte-identical output
        samples.push((clipped * i16::MAX as f64) as i16);
    }

    samples
}
