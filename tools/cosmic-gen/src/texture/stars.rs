//! Seeded star field overlay

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Palette, TextureBuffer};

/// Seed used by the wallpaper pipeline so every run places the same stars
pub const STAR_SEED: u64 = 42;

/// Scatter `count` filled star discs over the buffer
///
/// Brightness is drawn as the square of a uniform sample, which biases the
/// field toward small dim stars. Radius is 1 px for most stars and 2 px for
/// the brightest ones; color is the palette star color scaled into
/// `[0.7, 1.0]` by brightness.
pub fn add_stars(buffer: &mut TextureBuffer, count: u32, palette: &Palette, seed: u64) {
    if buffer.width == 0 || buffer.height == 0 {
        return;
    }

    let mut rng = Pcg32::seed_from_u64(seed);
    for _ in 0..count {
        let x = rng.random_range(0..buffer.width) as i64;
        let y = rng.random_range(0..buffer.height) as i64;
        let brightness = rng.random::<f32>().powi(2);
        let radius = 1 + (brightness * 2.0) as i64;

        let scale = 0.7 + 0.3 * brightness;
        let color = [
            (palette.star[0] as f32 * scale) as u8,
            (palette.star[1] as f32 * scale) as u8,
            (palette.star[2] as f32 * scale) as u8,
            255,
        ];
        fill_disc(buffer, x, y, radius, color);
    }

    tracing::debug!(count, seed, "stars scattered");
}

/// Fill every pixel within `radius` of (cx, cy), clipped to the buffer
fn fill_disc(buffer: &mut TextureBuffer, cx: i64, cy: i64, radius: i64, color: [u8; 4]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        let y = cy + dy;
        if y < 0 || y >= buffer.height as i64 {
            continue;
        }
        for dx in -radius..=radius {
            let x = cx + dx;
            if x < 0 || x >= buffer.width as i64 || dx * dx + dy * dy > r2 {
                continue;
            }
            buffer.set_pixel(x as u32, y as u32, color);
        }
    }
}
