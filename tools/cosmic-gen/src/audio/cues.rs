//! Short UI cues

use std::f32::consts::TAU;

use super::envelope::attack_decay;
use super::{time_axis, StereoBuffer};

/// Length of the focus cue in seconds
pub const FOCUS_DURATION: f32 = 0.45;
/// Length of the notification cue in seconds
pub const NOTIFICATION_DURATION: f32 = 0.6;

/// Rising 660 -> 1320 Hz sweep with an octave overtone (mono, duplicated)
pub fn focus_cue(duration: f32, sample_rate: u32) -> StereoBuffer {
    let times = time_axis(duration, sample_rate);
    let last = times.len().saturating_sub(1).max(1) as f32;

    let samples = times
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let freq = 660.0 + 660.0 * i as f32 / last;
            let base = (TAU * freq * t).sin();
            let overtone = (TAU * freq * 2.0 * t).sin() * 0.35;
            let sparkle = (TAU * 8.0 * t).sin() * 0.2;
            let env = attack_decay(t, 6.5, 18.0);
            ((base + overtone) * env + sparkle * env) * 0.8
        })
        .collect();

    StereoBuffer::from_mono(sample_rate, samples)
}

/// Warbling 880 Hz chime with a fifth-above sweep
///
/// A 0.7 Hz LFO pans the chime gently between the channels.
pub fn notification_cue(duration: f32, sample_rate: u32) -> StereoBuffer {
    let times = time_axis(duration, sample_rate);

    let mut left = Vec::with_capacity(times.len());
    let mut right = Vec::with_capacity(times.len());
    for &t in &times {
        let freq = 880.0 + 180.0 * (TAU * 2.2 * t).sin();
        let chime = (TAU * freq * t).sin();
        let sweep = (TAU * freq * 1.5 * t).sin() * 0.25;
        let env = attack_decay(t, 5.0, 12.0);
        let lfo = (TAU * 0.7 * t).sin();

        let voice = (chime + sweep) * env;
        left.push(voice * (0.8 + 0.2 * lfo) * 0.9);
        right.push(voice * (0.8 - 0.2 * lfo) * 0.9);
    }

    StereoBuffer::from_channels(sample_rate, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SAMPLE_RATE;

    #[test]
    fn test_focus_length_and_mono() {
        let cue = focus_cue(FOCUS_DURATION, SAMPLE_RATE);
        assert_eq!(cue.len(), (SAMPLE_RATE as f32 * FOCUS_DURATION) as usize);
        assert_eq!(cue.left, cue.right);
    }

    #[test]
    fn test_notification_is_stereo() {
        let cue = notification_cue(NOTIFICATION_DURATION, SAMPLE_RATE);
        assert_eq!(cue.len(), (SAMPLE_RATE as f32 * NOTIFICATION_DURATION) as usize);
        assert_ne!(cue.left, cue.right);
    }

    #[test]
    fn test_cues_in_range() {
        for cue in [
            focus_cue(FOCUS_DURATION, SAMPLE_RATE),
            notification_cue(NOTIFICATION_DURATION, SAMPLE_RATE),
        ] {
            assert!(cue.peak() <= 1.0, "peak {}", cue.peak());
            assert!(cue.peak() > 0.2);
        }
    }

    #[test]
    fn test_cues_start_silent_and_fade() {
        let cue = notification_cue(NOTIFICATION_DURATION, SAMPLE_RATE);
        assert_eq!(cue.left[0], 0.0);
        let tail = &cue.left[cue.len() - 100..];
        assert!(tail.iter().all(|s| s.abs() < 0.1));
    }

    #[test]
    fn test_degenerate_durations() {
        assert!(focus_cue(0.0, SAMPLE_RATE).is_empty());
        assert_eq!(focus_cue(2.5 / SAMPLE_RATE as f32, SAMPLE_RATE).len(), 2);
    }
}
