//! PNG/JPEG export and resizing for texture buffers

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};

use super::TextureBuffer;
use crate::error::Result;

/// JPEG quality used for every wallpaper export
pub const JPEG_QUALITY: u8 = 95;

/// Write a TextureBuffer to an RGBA PNG file
pub fn write_png(texture: &TextureBuffer, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, texture.width, texture.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&texture.pixels)?;
    writer.finish()?;

    Ok(())
}

/// Write a TextureBuffer to a JPEG file, discarding alpha
pub fn write_jpeg(texture: &TextureBuffer, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    let mut encoder = JpegEncoder::new_with_quality(&mut w, quality.clamp(1, 100));
    encoder.encode_image(&texture.to_rgb_image())?;
    w.flush()?;

    Ok(())
}

/// Resample to a new size with a Lanczos (a = 3) filter
pub fn resize_lanczos(texture: &TextureBuffer, width: u32, height: u32) -> Result<TextureBuffer> {
    TextureBuffer::check_dimensions(width, height)?;
    let resized = imageops::resize(&texture.to_rgba_image(), width, height, FilterType::Lanczos3);
    Ok(TextureBuffer::from_rgba_image(resized))
}
