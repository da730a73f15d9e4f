//! Synthesis invoker.

use std::path::Path;

use thiserror::Error;

use crate::audio::{IntermediateWaveform, temp_wav_path};
use crate::backend::{Backend, BackendError, HealthResponse, SynthesizeRequest};
use crate::input::SourceText;
use crate::voice::VoiceSelection;

/// Spoken language of every audiobook (ISO 639-1).
pub const LANGUAGE: &str = "pl";

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Backend error: {0}")]
    BackendError(#[from] BackendError),

    #[error("Failed to write intermediate audio {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Drives the TTS backend for one audiobook.
pub struct Synthesizer<B: Backend> {
    backend: B,
}

impl<B: Backend> Synthesizer<B> {
    /// Create a new synthesizer.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Ask the backend which device the model runs on.
    ///
    /// Running on CPU is allowed but logged as a warning.
    pub fn probe_device(&self) -> Result<HealthResponse, SynthesisError> {
        let health = self.backend.health()?;

        log::info!("Model: {} ({})", health.model, health.status);
        println!("Using device: {}", health.device);
        if !health.cuda_available {
            log::warn!("Running on CPU. This will be slower than GPU.");
        }

        Ok(health)
    }

    /// Synthesize `text` into the intermediate WAV next to `output`.
    ///
    /// Makes exactly one backend call, chosen by the voice mode.
    pub fn synthesize_to_file(
        &self,
        text: &SourceText,
        voice: &VoiceSelection,
        output: &Path,
    ) -> Result<IntermediateWaveform, SynthesisError> {
        let request = SynthesizeRequest::new(text.as_str(), LANGUAGE);

        let audio = match voice {
            VoiceSelection::ClonedFrom(reference) => {
                self.backend.clone_voice(reference, &request)?
            }
            VoiceSelection::Named(speaker) => self
                .backend
                .synthesize(&request.with_speaker(speaker.as_str()))?,
        };

        let path = temp_wav_path(output);
        log::debug!("Writing {} bytes to {}", audio.len(), path.display());

        IntermediateWaveform::write(path.clone(), &audio).map_err(|source| {
            SynthesisError::WriteFailed {
                path: path.display().to_string(),
                source,
            }
        })
    }
}
