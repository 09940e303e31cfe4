//! Procedural audio synthesis for the asset pipeline
//!
//! Provides the signal model, envelope shaping, render loop, and WAV export
//! used by the `gen-*` asset tools. Everything here is deterministic: a
//! render is a pure function of its parameters, so regenerating an asset
//! always produces byte-identical output.
//!
//! # Example
//! ```no_run
//! use proc_audio::*;
//!
//! // Render the default ambient pad at the pipeline sample rate
//! let config = RenderConfig::new(SAMPLE_RATE, 24.0);
//! let samples = render(&AmbientTone::default(), &FadeEnvelope::default(), &config);
//!
//! // Export to WAV
//! write_wav(&samples, SAMPLE_RATE, std::path::Path::new("ambient.wav"))?;
//! # Ok::<(), std::io::Error>(())
//! ```

mod envelope;
mod export;
mod render;
mod signal;

/// Asset pipeline sample rate (44.1kHz)
pub const SAMPLE_RATE: u32 = 44_100;

// Signal model
pub use signal::{AmbientTone, Partial};

// Envelope
pub use envelope::FadeEnvelope;

// Render loop
pub use render::{RenderConfig, render};

// Export
pub use export::write_wav;
