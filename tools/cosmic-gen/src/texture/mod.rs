//! Procedural wallpaper rendering
//!
//! The galaxy wallpaper is built in stages that each transform a
//! [`TextureBuffer`] in place:
//!
//! 1. [`radial_blend`] paints the swirling palette gradient
//! 2. [`add_stars`] scatters seeded star discs
//! 3. [`vignette`] darkens the edges toward the outer color
//!
//! [`create_wallpaper`] runs the three stages with the shipped parameters.
//! [`create_logo`] and [`animated_frames`] build on top of it.
//!
//! # Example
//! ```no_run
//! use cosmic_gen::texture::*;
//! use std::path::Path;
//!
//! let wallpaper = create_wallpaper(1920, 1080, 0.0)?;
//! write_jpeg(&wallpaper, Path::new("wallpaper.jpg"), JPEG_QUALITY)?;
//! # Ok::<(), cosmic_gen::GenError>(())
//! ```

mod animation;
mod export;
mod galaxy;
mod logo;
mod palette;
mod stars;
mod vignette;
mod wallpaper;

// Core type
pub use self::buffer::TextureBuffer;

// Palette
pub use palette::{rgb_distance, Palette, Rgb};

// Pipeline stages
pub use galaxy::radial_blend;
pub use stars::{add_stars, STAR_SEED};
pub use vignette::vignette;

// Composites
pub use animation::{animated_frames, frame_rotation, write_gif};
pub use logo::{create_logo, LogoText, DEFAULT_FONT_PATH};
pub use wallpaper::{create_wallpaper, WallpaperParams};

// Export
pub use export::{resize_lanczos, write_jpeg, write_png, JPEG_QUALITY};

mod buffer {
    use crate::error::{GenError, Result};

    /// RGBA image buffer used by every stage of the pipeline
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TextureBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGBA pixel data (4 bytes per pixel, row-major order)
        pub pixels: Vec<u8>,
    }

    impl TextureBuffer {
        /// Create a new texture buffer initialized to transparent black
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0u8; width as usize * height as usize * 4],
            }
        }

        /// Create a texture buffer filled with a solid color
        pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
            let mut buffer = Self::new(width, height);
            for chunk in buffer.pixels.chunks_exact_mut(4) {
                chunk.copy_from_slice(&color);
            }
            buffer
        }

        /// Reject zero-sized buffers before any work is done on them
        pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
            if width == 0 || height == 0 {
                return Err(GenError::InvalidDimensions { width, height });
            }
            Ok(())
        }

        #[inline]
        fn index(&self, x: u32, y: u32) -> usize {
            (y as usize * self.width as usize + x as usize) * 4
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
            let idx = self.index(x, y);
            [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ]
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
            let idx = self.index(x, y);
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }

        /// Drop the alpha channel
        pub fn to_rgb_image(&self) -> image::RgbImage {
            let rgb: Vec<u8> = self
                .pixels
                .chunks_exact(4)
                .flat_map(|p| [p[0], p[1], p[2]])
                .collect();
            image::RgbImage::from_raw(self.width, self.height, rgb)
                .expect("buffer length matches dimensions")
        }

        /// Copy into an `image` RGBA buffer
        pub fn to_rgba_image(&self) -> image::RgbaImage {
            image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
                .expect("buffer length matches dimensions")
        }

        /// Take ownership of an `image` RGBA buffer
        pub fn from_rgba_image(img: image::RgbaImage) -> Self {
            let (width, height) = img.dimensions();
            Self {
                width,
                height,
                pixels: img.into_raw(),
            }
        }
    }
}
