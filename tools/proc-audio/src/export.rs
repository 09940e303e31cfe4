//! WAV export
//!
//! Writes rendered PCM to disk in the format the pipeline expects
//! (mono, 16-bit, signed little-endian).

use std::fs;
use std::path::Path;

/// Write PCM i16 samples to a mono 16-bit WAV file.
///
/// Creates the parent directory if it doesn't exist and overwrites any
/// existing file at `path`. The writer is finalized before returning, so a
/// successful return means the file is complete on disk.
///
/// # Arguments
/// * `samples` - PCM i16 samples in playback order
/// * `sample_rate` - Sample rate in Hz
/// * `path` - Output file path
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> std::io::Result<()> {
    use hound::{SampleFormat, WavSpec, WavWriter};

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    }

    writer
        .finalize()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}
