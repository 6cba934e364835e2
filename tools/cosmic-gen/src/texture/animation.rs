//! Animated wallpaper (looping GIF)

use std::f32::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{create_wallpaper, TextureBuffer};
use crate::error::{GenError, Result};

/// Fraction of a full turn the arms rotate over one loop
const ROTATION_SCALE: f32 = 0.08;

/// NeuQuant sampling factor for palette quantisation (1 = best, 30 = fastest)
const QUANTIZE_SPEED: i32 = 10;

/// Arm rotation for frame `index` of `frame_count`
///
/// The rotation sweeps one full turn linearly, scaled down by
/// [`ROTATION_SCALE`].
pub fn frame_rotation(index: u32, frame_count: u32) -> f32 {
    if frame_count == 0 {
        return 0.0;
    }
    (index as f32 / frame_count as f32) * TAU * ROTATION_SCALE
}

/// Render `frame_count` wallpaper frames that differ only in rotation
pub fn animated_frames(width: u32, height: u32, frame_count: u32) -> Result<Vec<TextureBuffer>> {
    if frame_count == 0 {
        return Err(GenError::EmptyAnimation);
    }
    (0..frame_count)
        .map(|i| create_wallpaper(width, height, frame_rotation(i, frame_count)))
        .collect()
}

/// Encode frames as an infinitely looping GIF
///
/// All frames must share the size of the first one. `delay_ms` is rounded
/// down to GIF's 10 ms resolution.
pub fn write_gif(frames: &[TextureBuffer], path: &Path, delay_ms: u32) -> Result<()> {
    let first = frames.first().ok_or(GenError::EmptyAnimation)?;
    let (width, height) = gif_dimensions(first)?;

    let file = File::create(path)?;
    let mut encoder = gif::Encoder::new(BufWriter::new(file), width, height, &[])?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    // GIF delays are in centiseconds
    let delay = (delay_ms / 10).min(u16::MAX as u32) as u16;

    for buffer in frames {
        if gif_dimensions(buffer)? != (width, height) {
            return Err(GenError::InvalidDimensions {
                width: buffer.width,
                height: buffer.height,
            });
        }
        let rgb = buffer.to_rgb_image();
        let mut frame = gif::Frame::from_rgb_speed(width, height, rgb.as_raw(), QUANTIZE_SPEED);
        frame.delay = delay;
        encoder.write_frame(&frame)?;
    }
    encoder.into_inner()?.flush()?;

    tracing::debug!(frames = frames.len(), path = %path.display(), "GIF written");
    Ok(())
}

fn gif_dimensions(buffer: &TextureBuffer) -> Result<(u16, u16)> {
    let invalid = || GenError::InvalidDimensions {
        width: buffer.width,
        height: buffer.height,
    };
    let width = u16::try_from(buffer.width).map_err(|_| invalid())?;
    let height = u16::try_from(buffer.height).map_err(|_| invalid())?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_frame_rotation_sweep() {
        assert_eq!(frame_rotation(0, 24), 0.0);
        let half = frame_rotation(12, 24);
        assert!((half - TAU * ROTATION_SCALE / 2.0).abs() < 1e-6);
        // Never reaches the full sweep, so the loop does not repeat a frame
        assert!(frame_rotation(23, 24) < TAU * ROTATION_SCALE);
        assert_eq!(frame_rotation(3, 0), 0.0);
    }

    #[test]
    fn test_animated_frames_vary_only_by_rotation() {
        let frames = animated_frames(32, 18, 4).unwrap();
        assert_eq!(frames.len(), 4);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!((frame.width, frame.height), (32, 18));
            let expected = create_wallpaper(32, 18, frame_rotation(i as u32, 4)).unwrap();
            assert_eq!(frame, &expected);
        }
    }

    #[test]
    fn test_zero_frames_rejected() {
        assert!(matches!(
            animated_frames(8, 8, 0),
            Err(GenError::EmptyAnimation)
        ));
        let dir = tempdir().unwrap();
        assert!(matches!(
            write_gif(&[], &dir.path().join("empty.gif"), 100),
            Err(GenError::EmptyAnimation)
        ));
    }

    #[test]
    fn test_write_gif_decodes_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        let frames = animated_frames(24, 16, 3).unwrap();
        write_gif(&frames, &path, 120).unwrap();

        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);
        let mut decoder = options.read_info(File::open(&path).unwrap()).unwrap();
        assert_eq!((decoder.width(), decoder.height()), (24, 16));

        let mut count = 0;
        while let Some(frame) = decoder.read_next_frame().unwrap() {
            assert_eq!(frame.delay, 12);
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_mismatched_frame_size_rejected() {
        let dir = tempdir().unwrap();
        let frames = vec![
            TextureBuffer::filled(8, 8, [0, 0, 0, 255]),
            TextureBuffer::filled(4, 8, [0, 0, 0, 255]),
        ];
        let err = write_gif(&frames, &dir.path().join("bad.gif"), 100).unwrap_err();
        assert!(matches!(err, GenError::InvalidDimensions { width: 4, .. }));
    }
}
