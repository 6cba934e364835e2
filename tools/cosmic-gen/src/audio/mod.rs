//! Procedural audio synthesis
//!
//! Every sound is computed in full from closed-form sine partials over a
//! time axis, shaped by the envelopes in [`envelope`], and written as 16-bit
//! stereo WAV.
//!
//! # Example
//! ```no_run
//! use cosmic_gen::audio::*;
//!
//! let pad = ambient_pad(AMBIENT_DURATION, SAMPLE_RATE);
//! write_wav(&pad, std::path::Path::new("background_music.wav"))?;
//! # Ok::<(), cosmic_gen::GenError>(())
//! ```

mod cues;
pub mod envelope;
mod export;
mod pad;

/// Output sample rate (CD quality)
pub const SAMPLE_RATE: u32 = 44_100;

pub use cues::{focus_cue, notification_cue, FOCUS_DURATION, NOTIFICATION_DURATION};
pub use export::{to_pcm_i16, write_wav};
pub use pad::{ambient_pad, AMBIENT_DURATION};

/// Two-channel sample buffer (f32 samples, -1.0 to 1.0 range)
#[derive(Clone, Debug, PartialEq)]
pub struct StereoBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub left: Vec<f32>,
    pub right: Vec<f32>,
}

impl StereoBuffer {
    /// Build from separate channels; the longer channel is truncated
    pub fn from_channels(sample_rate: u32, mut left: Vec<f32>, mut right: Vec<f32>) -> Self {
        let len = left.len().min(right.len());
        left.truncate(len);
        right.truncate(len);
        Self {
            sample_rate,
            left,
            right,
        }
    }

    /// Promote a mono signal by copying it to both channels
    pub fn from_mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            left: samples.clone(),
            right: samples,
        }
    }

    /// Number of frames (samples per channel)
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f32 {
        self.len() as f32 / self.sample_rate as f32
    }

    /// Largest absolute sample over both channels
    pub fn peak(&self) -> f32 {
        self.left
            .iter()
            .chain(&self.right)
            .fold(0.0f32, |a, s| a.max(s.abs()))
    }

    /// Interleaved L/R frames
    pub fn interleaved(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .flat_map(|(&l, &r)| [l, r])
            .collect()
    }
}

/// Sample times for `duration` seconds, endpoint excluded
///
/// Yields `floor(sample_rate * duration)` values spaced `duration / n` apart.
pub fn time_axis(duration: f32, sample_rate: u32) -> Vec<f32> {
    let n = (sample_rate as f32 * duration.max(0.0)) as usize;
    let step = if n == 0 { 0.0 } else { duration as f64 / n as f64 };
    (0..n).map(|i| (i as f64 * step) as f32).collect()
}
