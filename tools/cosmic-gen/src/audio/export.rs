//! PCM conversion and WAV export

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::StereoBuffer;
use crate::error::Result;

/// Convert f32 samples (-1.0 to 1.0) to PCM i16
///
/// Samples are clamped first, so the result never wraps; -1.0 maps to
/// -32767, not -32768.
pub fn to_pcm_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Write a stereo buffer as 16-bit two-channel WAV
pub fn write_wav(buffer: &StereoBuffer, path: &Path) -> Result<()> {
    let spec = WavSpec {
        channels: 2,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for sample in to_pcm_i16(&buffer.interleaved()) {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    tracing::debug!(
        path = %path.display(),
        frames = buffer.len(),
        seconds = buffer.duration(),
        "WAV written"
    );
    Ok(())
}
