//! Image outputs
//!
//! File naming:
//! - `wallpaper_4k.jpg` - full-size wallpaper
//! - `wallpaper_preview.jpg` - the same wallpaper at a quarter of the size
//! - `wallpaper_square.jpg` - square wallpaper
//! - `logo.png` - logo with rings and title
//! - `wallpaper_animated.gif` - looping rotation of the wallpaper

use anyhow::{Context, Result};
use cosmic_gen::texture::*;
use std::path::Path;

/// Sizes and timing for every generated image
#[derive(Debug, Clone, Copy)]
pub struct ImageSet {
    pub wallpaper: (u32, u32),
    /// Preview is the wallpaper divided by this factor on both axes
    pub preview_divisor: u32,
    pub square: u32,
    pub logo: u32,
    pub animation: (u32, u32),
    pub animation_frames: u32,
    pub frame_delay_ms: u32,
}

impl Default for ImageSet {
    fn default() -> Self {
        Self {
            wallpaper: (1920, 1080),
            preview_divisor: 4,
            square: 1024,
            logo: 512,
            animation: (1280, 720),
            animation_frames: 24,
            frame_delay_ms: 120,
        }
    }
}

impl ImageSet {
    /// Render and write all images into `output_dir`, returning the file count
    pub fn generate(&self, output_dir: &Path, font: &Path) -> Result<usize> {
        let (w, h) = self.wallpaper;
        let wallpaper = create_wallpaper(w, h, 0.0).context("Failed to render wallpaper")?;
        save_jpeg(&wallpaper, &output_dir.join("wallpaper_4k.jpg"))?;

        let divisor = self.preview_divisor.max(1);
        let preview = resize_lanczos(&wallpaper, (w / divisor).max(1), (h / divisor).max(1))
            .context("Failed to resize preview")?;
        save_jpeg(&preview, &output_dir.join("wallpaper_preview.jpg"))?;

        let square = create_wallpaper(self.square, self.square, 0.0)
            .context("Failed to render square wallpaper")?;
        save_jpeg(&square, &output_dir.join("wallpaper_square.jpg"))?;

        let logo = create_logo(self.logo, font, &LogoText::default())
            .with_context(|| format!("Failed to render logo with font {}", font.display()))?;
        let logo_path = output_dir.join("logo.png");
        write_png(&logo, &logo_path)
            .with_context(|| format!("Failed to write {}", logo_path.display()))?;
        tracing::info!("  -> {} ({}x{})", logo_path.display(), logo.width, logo.height);

        let (aw, ah) = self.animation;
        let frames = animated_frames(aw, ah, self.animation_frames)
            .context("Failed to render animation frames")?;
        let gif_path = output_dir.join("wallpaper_animated.gif");
        write_gif(&frames, &gif_path, self.frame_delay_ms)
            .with_context(|| format!("Failed to write {}", gif_path.display()))?;
        tracing::info!(
            "  -> {} ({} frames, {} ms)",
            gif_path.display(),
            frames.len(),
            self.frame_delay_ms
        );

        Ok(5)
    }
}

fn save_jpeg(texture: &TextureBuffer, path: &Path) -> Result<()> {
    write_jpeg(texture, path, JPEG_QUALITY)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("  -> {} ({}x{})", path.display(), texture.width, texture.height);
    Ok(())
}
