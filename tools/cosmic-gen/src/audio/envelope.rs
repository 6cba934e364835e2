//! Amplitude envelopes
//!
//! Closed-form gain curves evaluated at a time `t` in seconds.

use std::f32::consts::{PI, TAU};

/// Percussive attack-decay curve: `exp(-decay t) * (1 - exp(-rise t))`
///
/// Starts at zero, peaks shortly after the onset and decays exponentially.
/// Rise and decay are rates in 1/s.
#[inline]
pub fn attack_decay(t: f32, decay: f32, rise: f32) -> f32 {
    (-t * decay).exp() * (1.0 - (-t * rise).exp())
}

/// Linear fade-in over `attack` seconds multiplied by an exponential decay
/// with time constant `decay_time`
#[inline]
pub fn fade(t: f32, attack: f32, decay_time: f32) -> f32 {
    let ramp = if attack > 0.0 { (t / attack).min(1.0) } else { 1.0 };
    ramp * (-t / decay_time).exp()
}

/// Slow sinusoidal swell oscillating in `[base - depth, base + depth]`
#[inline]
pub fn swell(t: f32, base: f32, depth: f32, rate: f32, phase: f32) -> f32 {
    base + depth * (TAU * rate * t + phase).sin()
}

/// Phase offset that starts a [`swell`] a sixth of a cycle in
pub const SWELL_PHASE: f32 = PI / 3.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_decay_shape() {
        assert_eq!(attack_decay(0.0, 6.5, 18.0), 0.0);
        let early = attack_decay(0.01, 6.5, 18.0);
        let peak = attack_decay(0.07, 6.5, 18.0);
        let late = attack_decay(0.4, 6.5, 18.0);
        assert!(early < peak);
        assert!(late < peak);
        for i in 0..1000 {
            let g = attack_decay(i as f32 * 0.001, 5.0, 12.0);
            assert!((0.0..=1.0).contains(&g));
        }
    }

    #[test]
    fn test_fade_ramp_then_decay() {
        assert_eq!(fade(0.0, 2.0, 57.6), 0.0);
        assert!((fade(1.0, 2.0, 57.6) - 0.5 * (-1.0f32 / 57.6).exp()).abs() < 1e-6);
        assert!(fade(2.0, 2.0, 57.6) > fade(30.0, 2.0, 57.6));
        assert_eq!(fade(0.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_swell_bounds() {
        for i in 0..600 {
            let g = swell(i as f32 * 0.1, 0.65, 0.35, 0.06, SWELL_PHASE);
            assert!((0.3 - 1e-6..=1.0 + 1e-6).contains(&g));
        }
    }
}
