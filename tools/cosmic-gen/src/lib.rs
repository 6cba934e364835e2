//! Procedural asset generation for the Cosmic Spectrum mod
//!
//! Two independent pipelines share this crate:
//!
//! - [`texture`] renders galaxy wallpapers, the logo and the animated
//!   wallpaper, and encodes them as JPEG, PNG or GIF.
//! - [`audio`] synthesizes the ambient background track and the two UI cues
//!   and encodes them as 16-bit stereo WAV.
//!
//! Everything is computed in memory in a single pass; nothing is cached
//! between calls.
//!
//! # Texture Example
//! ```no_run
//! use cosmic_gen::texture::*;
//! use std::path::Path;
//!
//! let wallpaper = create_wallpaper(1024, 1024, 0.0)?;
//! write_jpeg(&wallpaper, Path::new("wallpaper_square.jpg"), JPEG_QUALITY)?;
//!
//! let logo = create_logo(512, Path::new(DEFAULT_FONT_PATH), &LogoText::default())?;
//! write_png(&logo, Path::new("logo.png"))?;
//! # Ok::<(), cosmic_gen::GenError>(())
//! ```
//!
//! # Audio Example
//! ```no_run
//! use cosmic_gen::audio::*;
//!
//! let cue = focus_cue(FOCUS_DURATION, SAMPLE_RATE);
//! write_wav(&cue, std::path::Path::new("sfx_focus.wav"))?;
//! # Ok::<(), cosmic_gen::GenError>(())
//! ```

pub mod audio;
pub mod error;
pub mod texture;

pub use error::{GenError, Result};
