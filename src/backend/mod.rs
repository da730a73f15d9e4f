//! Backend communication with the XTTS-v2 model server.
//!
//! The model itself runs out of process (it needs PyTorch and, ideally, a
//! GPU). This module defines the calls the generator makes against it.

mod client;
mod types;

pub use client::HttpBackend;
pub use types::{BackendError, HealthResponse, SynthesizeRequest};

use std::path::Path;

/// Default port of the XTTS-v2 server.
pub const DEFAULT_PORT: u16 = 8020;

/// Trait for TTS backend communication.
///
/// This trait abstracts the HTTP communication with the model server,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Check backend health and the device the model runs on.
    fn health(&self) -> Result<HealthResponse, BackendError>;

    /// Synthesize speech with a catalog speaker.
    ///
    /// # Returns
    /// Raw WAV audio data
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError>;

    /// Synthesize speech in the voice of a reference recording.
    ///
    /// # Arguments
    /// * `audio_path` - Reference recording to clone
    /// * `request` - Text and language; `speaker` is ignored
    fn clone_voice(
        &self,
        audio_path: &Path,
        request: &SynthesizeRequest,
    ) -> Result<Vec<u8>, BackendError>;
}

/// Create a backend for the server at `host:port`.
pub fn create_backend(host: &str, port: u16) -> Result<HttpBackend, BackendError> {
    HttpBackend::new(host, port)
}
