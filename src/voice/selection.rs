//! Voice selection for a single run.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::catalog::resolve_speaker;

/// Errors that can occur while selecting a voice.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Voice file not found: {0}")]
    NotFound(PathBuf),
}

/// The voice the engine will speak with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceSelection {
    /// Clone the voice from a reference recording (6+ seconds recommended).
    ClonedFrom(PathBuf),
    /// Use a predefined catalog speaker.
    Named(String),
}

impl VoiceSelection {
    /// Short description for progress output.
    pub fn describe(&self) -> String {
        match self {
            VoiceSelection::ClonedFrom(path) => format!("Voice cloning from: {}", path.display()),
            VoiceSelection::Named(name) => format!("Using speaker: {name}"),
        }
    }
}

/// Resolve the voice from the command options.
///
/// The caller rejects the case where both options are set; if it happens
/// anyway, the reference file wins.
///
/// # Arguments
/// * `voice_file` - Reference recording for cloning mode
/// * `voice_name` - Catalog speaker name; unknown names fall back to the default
pub fn select_voice(
    voice_file: Option<&Path>,
    voice_name: Option<&str>,
) -> Result<VoiceSelection, VoiceError> {
    if let Some(path) = voice_file {
        if !path.exists() {
            return Err(VoiceError::NotFound(path.to_path_buf()));
        }
        return Ok(VoiceSelection::ClonedFrom(path.to_path_buf()));
    }

    let resolution = resolve_speaker(voice_name);
    if resolution.substituted {
        log::warn!(
            "Speaker '{}' not found. Using default: {}",
            voice_name.unwrap_or_default(),
            resolution.name
        );
    }

    Ok(VoiceSelection::Named(resolution.name.to_string()))
}
