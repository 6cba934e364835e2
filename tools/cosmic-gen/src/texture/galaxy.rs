//! Swirling radial palette gradient
//!
//! Every pixel is mapped onto a centered `[-1, 1] x [-1, 1]` grid and
//! converted to polar coordinates. The color is a blend of three palette
//! entries driven by the radius, with brightness modulated by a three-armed
//! spiral whose angle is twisted more strongly near the center.

use super::{Palette, TextureBuffer};
use crate::error::Result;

/// Radial decay of the swirl offset
const SWIRL_FALLOFF: f32 = 2.5;
/// Number of spiral arms
const ARM_COUNT: f32 = 3.0;
/// Radial decay of the arm brightness modulation
const ARM_FALLOFF: f32 = 3.0;
/// Gaussian width of the bright core (`exp(-k r^2)`)
const CORE_FALLOFF: f32 = 4.0;

/// Paint the galaxy gradient into a new opaque buffer
///
/// # Arguments
/// * `swirl` - Angular offset in radians at the center, decaying with radius
/// * `rotation` - Global rotation in radians applied to the spiral arms
pub fn radial_blend(
    width: u32,
    height: u32,
    palette: &Palette,
    swirl: f32,
    rotation: f32,
) -> Result<TextureBuffer> {
    TextureBuffer::check_dimensions(width, height)?;

    let outer = palette.outer_f32();
    let mid = palette.mid_f32();
    let core = palette.core_f32();

    let xs = linspace(-1.0, 1.0, width);
    let ys = linspace(-1.0, 1.0, height);

    let mut buffer = TextureBuffer::new(width, height);
    for (y, &v) in ys.iter().enumerate() {
        for (x, &u) in xs.iter().enumerate() {
            let radius = (u * u + v * v).sqrt();
            let angle = v.atan2(u) + swirl * (-radius * SWIRL_FALLOFF).exp() + rotation;

            let t = radius.clamp(0.0, 1.0);
            let arm = ((angle * ARM_COUNT).sin() * (-radius * ARM_FALLOFF).exp() + 1.0) / 2.0;
            let arm_gain = 0.7 + 0.6 * arm;
            let core_weight = (-(radius * radius) * CORE_FALLOFF).exp();

            let mut rgba = [0u8, 0, 0, 255];
            for c in 0..3 {
                let mid_mix = outer[c] * (1.0 - t) + mid[c] * t;
                let value = mid_mix * arm_gain * (1.0 - core_weight) + core[c] * core_weight;
                rgba[c] = value.clamp(0.0, 255.0) as u8;
            }
            buffer.set_pixel(x as u32, y as u32, rgba);
        }
    }

    tracing::debug!(width, height, swirl, rotation, "radial blend rendered");
    Ok(buffer)
}

/// Evenly spaced samples over `[start, end]`, both ends included
fn linspace(start: f32, end: f32, count: u32) -> Vec<f32> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f32;
    (0..count).map(|i| start + step * i as f32).collect()
}
