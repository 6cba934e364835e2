//! Error type for the generation pipeline

use std::path::PathBuf;

/// Result alias that carries [`GenError`].
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors raised while rendering or encoding assets.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// Filesystem failure while writing an asset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JPEG/PNG encoding or resize failure from the `image` crate.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// PNG encoder failure.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// GIF encoder failure.
    #[error("GIF encoding failed: {0}")]
    Gif(#[from] gif::EncodingError),

    /// WAV writer failure.
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    /// The logo font could not be loaded.
    #[error("failed to load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    /// The logo overlay could not be rasterised.
    #[error("logo overlay rendering failed: {0}")]
    Overlay(String),

    /// Width or height of zero, or too large for the target format.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// An animation was requested with no frames.
    #[error("animation has no frames")]
    EmptyAnimation,
}
