//! Ambient Loop Asset Generator
//!
//! Generates `Assets/ambient.wav`: a 24-second mono ambient pad used as the
//! background bed. The pad is a 220 Hz fundamental with its 2nd and 3rd
//! harmonics, a slow breathing swell, and a light shimmer, faded in and out
//! over 3 seconds at each end so the loop doesn't click.
//!
//! Takes no arguments; re-running overwrites the asset with byte-identical
//! content.

use anyhow::Result;
use proc_audio::{AmbientTone, FadeEnvelope, RenderConfig, render, write_wav};
use std::path::{Path, PathBuf};

/// Output sample rate in Hz
const SAMPLE_RATE: u32 = 44_100;

/// Loop length in seconds
const DURATION_SECS: f64 = 24.0;

/// Assets folder at the repository root, next to `tools/`
fn output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("Assets")
        .join("ambient.wav")
}

/// Render the full-length ambient loop with the shipped constants
fn render_ambient_loop() -> Vec<i16> {
    let config = RenderConfig::new(SAMPLE_RATE, DURATION_SECS);
    render(&AmbientTone::default(), &FadeEnvelope::default(), &config)
}

fn main() -> Result<()> {
    println!("Generating ambient loop...");

    let path = output_path();
    let samples = render_ambient_loop();
    write_wav(&samples, SAMPLE_RATE, &path)?;

    println!("Wrote {}", path.canonicalize()?.display());
    Ok(())
}
