//! Ambient background pad

use std::f32::consts::{PI, TAU};

use super::envelope::{fade, swell, SWELL_PHASE};
use super::{time_axis, StereoBuffer};

/// Length of the background track in seconds
pub const AMBIENT_DURATION: f32 = 36.0;

/// Slow drifting pad built from four sine partials
///
/// A 55 Hz root and a 110 Hz partial carry the body, a 440 Hz shimmer
/// drifts by +/-38 Hz, and a 0.18 Hz pulse is phase-shifted between the
/// channels for width. The sum is shaped by a slow swell and a fade that
/// ramps in over two seconds and decays across the track.
pub fn ambient_pad(duration: f32, sample_rate: u32) -> StereoBuffer {
    let times = time_axis(duration, sample_rate);
    let decay_time = duration * 1.6;

    let mut left = Vec::with_capacity(times.len());
    let mut right = Vec::with_capacity(times.len());
    for &t in &times {
        let low = (TAU * 55.0 * t).sin() * 0.28;
        let mid = (TAU * 110.0 * t + PI / 6.0).sin() * 0.32;
        let shimmer_freq = 440.0 + 38.0 * (TAU * 0.05 * t).sin();
        let shimmer = (TAU * shimmer_freq * t).sin() * 0.18;
        let pulse_l = (TAU * 0.18 * t).sin() * 0.12;
        let pulse_r = (TAU * 0.18 * t - PI / 4.0).sin() * 0.12;

        let gain = swell(t, 0.65, 0.35, 0.06, SWELL_PHASE) * fade(t, 2.0, decay_time);
        let body = low + mid + shimmer;
        left.push((body + pulse_l) * gain);
        right.push((body + pulse_r) * gain);
    }

    StereoBuffer::from_channels(sample_rate, left, right)
}
