//! Soft elliptical vignette

use image::{imageops, GrayImage, Luma};

use super::{Rgb, TextureBuffer};

/// Ellipse bounds as a fraction of the frame (extends 20% past each edge)
const ELLIPSE_OVERSCAN: f32 = 0.2;
/// Blur sigma as a fraction of the shorter side
const BLUR_FRACTION: f32 = 0.1;

/// Composite the buffer over a solid `background` through a blurred ellipse
///
/// Inside the ellipse the image keeps `strength` of its own color; toward the
/// corners the blurred mask falls off and the background shows through.
pub fn vignette(buffer: &mut TextureBuffer, background: Rgb, strength: f32) {
    if buffer.width == 0 || buffer.height == 0 {
        return;
    }

    let mask = vignette_mask(buffer.width, buffer.height, strength);
    for (pixel, m) in buffer.pixels.chunks_exact_mut(4).zip(mask.pixels()) {
        let alpha = m.0[0] as f32 / 255.0;
        for c in 0..3 {
            let value = pixel[c] as f32 * alpha + background[c] as f32 * (1.0 - alpha);
            pixel[c] = value.round().clamp(0.0, 255.0) as u8;
        }
    }

    tracing::debug!(strength, "vignette applied");
}

/// Build the blurred vignette mask
///
/// The mask is drawn on a canvas padded by three sigmas on every side so the
/// blur sees empty space beyond the frame, then cropped back to size.
fn vignette_mask(width: u32, height: u32, strength: f32) -> GrayImage {
    let sigma = width.min(height) as f32 * BLUR_FRACTION;
    let pad = (sigma * 3.0).ceil() as u32;
    let level = (255.0 * strength.clamp(0.0, 1.0)) as u8;

    let w = width as f32;
    let h = height as f32;
    let (left, top) = (-w * ELLIPSE_OVERSCAN, -h * ELLIPSE_OVERSCAN);
    let (right, bottom) = (w * (1.0 + ELLIPSE_OVERSCAN), h * (1.0 + ELLIPSE_OVERSCAN));
    let (cx, cy) = ((left + right) / 2.0, (top + bottom) / 2.0);
    let (rx, ry) = ((right - left) / 2.0, (bottom - top) / 2.0);

    let mut canvas = GrayImage::new(width + pad * 2, height + pad * 2);
    for (px, py, value) in canvas.enumerate_pixels_mut() {
        let x = px as f32 - pad as f32 + 0.5;
        let y = py as f32 - pad as f32 + 0.5;
        let nx = (x - cx) / rx;
        let ny = (y - cy) / ry;
        if nx * nx + ny * ny <= 1.0 {
            *value = Luma([level]);
        }
    }

    let blurred = if sigma > 0.0 {
        imageops::fast_blur(&canvas, sigma)
    } else {
        canvas
    };
    imageops::crop_imm(&blurred, pad, pad, width, height).to_image()
}
