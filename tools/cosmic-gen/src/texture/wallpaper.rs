//! Full wallpaper composition

use super::{add_stars, radial_blend, vignette, Palette, TextureBuffer, STAR_SEED};
use crate::error::Result;

/// Parameters for one wallpaper render
#[derive(Debug, Clone, Copy)]
pub struct WallpaperParams {
    pub palette: Palette,
    /// Swirl strength at the center, in radians
    pub swirl: f32,
    /// Global arm rotation, in radians
    pub rotation: f32,
    /// Pixels per star; the star count is `width * height / star_area`
    pub star_area: u32,
    pub star_seed: u64,
    /// Fraction of the image kept at the vignette center
    pub vignette_strength: f32,
}

impl Default for WallpaperParams {
    fn default() -> Self {
        Self {
            palette: Palette::COSMIC,
            swirl: 1.25,
            rotation: 0.0,
            star_area: 1600,
            star_seed: STAR_SEED,
            vignette_strength: 0.85,
        }
    }
}

impl WallpaperParams {
    /// Default parameters with a different arm rotation
    pub fn with_rotation(rotation: f32) -> Self {
        Self {
            rotation,
            ..Self::default()
        }
    }

    /// Run the blend, star and vignette stages
    pub fn render(&self, width: u32, height: u32) -> Result<TextureBuffer> {
        let mut buffer = radial_blend(width, height, &self.palette, self.swirl, self.rotation)?;

        let star_count = (width as u64 * height as u64 / self.star_area.max(1) as u64) as u32;
        add_stars(&mut buffer, star_count, &self.palette, self.star_seed);
        vignette(&mut buffer, self.palette.outer, self.vignette_strength);

        Ok(buffer)
    }
}

/// Render the shipped wallpaper at the given size and rotation
pub fn create_wallpaper(width: u32, height: u32, rotation: f32) -> Result<TextureBuffer> {
    WallpaperParams::with_rotation(rotation).render(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::rgb_distance;

    fn rgb(buf: &TextureBuffer, x: u32, y: u32) -> [u8; 3] {
        let p = buf.get_pixel(x, y);
        [p[0], p[1], p[2]]
    }

    #[test]
    fn test_wallpaper_size() {
        for (w, h) in [(64, 64), (80, 45), (33, 90)] {
            let wp = create_wallpaper(w, h, 0.0).unwrap();
            assert_eq!((wp.width, wp.height), (w, h));
        }
    }

    #[test]
    fn test_center_core_corners_outer() {
        let palette = Palette::COSMIC;
        let wp = create_wallpaper(64, 64, 0.0).unwrap();

        let center = rgb(&wp, 32, 32);
        assert!(
            rgb_distance(center, palette.core) < rgb_distance(center, palette.outer),
            "center {:?}",
            center
        );

        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            let corner = rgb(&wp, x, y);
            assert!(
                rgb_distance(corner, palette.outer) < rgb_distance(corner, palette.core),
                "corner ({}, {}) {:?}",
                x,
                y,
                corner
            );
        }
    }

    #[test]
    fn test_wallpaper_is_deterministic() {
        let a = create_wallpaper(48, 32, 0.2).unwrap();
        let b = create_wallpaper(48, 32, 0.2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wallpaper_is_opaque() {
        let wp = create_wallpaper(40, 30, 0.0).unwrap();
        assert!(wp.pixels.chunks_exact(4).all(|p| p[3] == 255));
    }
}
