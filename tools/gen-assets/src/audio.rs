//! Audio outputs
//!
//! Each sound is saved as `audio/{file}` under the asset directory.

use anyhow::{Context, Result};
use cosmic_gen::audio::*;
use std::path::Path;

/// Subdirectory of the asset directory that holds the WAV files
pub const AUDIO_SUBDIR: &str = "audio";

/// Sound definition: output file, display name and renderer
pub struct SoundDef {
    pub file: &'static str,
    pub name: &'static str,
    pub render: fn(u32) -> StereoBuffer,
}

/// All shipped sounds
pub const SOUNDS: &[SoundDef] = &[
    SoundDef {
        file: "background_music.wav",
        name: "Ambient pad",
        render: |rate| ambient_pad(AMBIENT_DURATION, rate),
    },
    SoundDef {
        file: "sfx_focus.wav",
        name: "Focus cue",
        render: |rate| focus_cue(FOCUS_DURATION, rate),
    },
    SoundDef {
        file: "sfx_notification.wav",
        name: "Notification cue",
        render: |rate| notification_cue(NOTIFICATION_DURATION, rate),
    },
];

/// Synthesize and write every sound into `output_dir`
pub fn generate_sounds(output_dir: &Path) -> Result<usize> {
    tracing::info!("  Generating {} sounds", SOUNDS.len());

    for sound in SOUNDS {
        let buffer = (sound.render)(SAMPLE_RATE);
        let path = output_dir.join(sound.file);
        write_wav(&buffer, &path).with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(
            "  -> {} ({} frames, {:.2}s) - {}",
            path.display(),
            buffer.len(),
            buffer.duration(),
            sound.name
        );
    }

    Ok(SOUNDS.len())
}
