//! HTTP client for the XTTS-v2 server.

use std::path::Path;
use std::time::Duration;

use super::Backend;
use super::types::{BackendError, HealthResponse, SynthesizeRequest};

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client.
    ///
    /// Requests have no timeout: narrating a whole book can take a long time.
    pub fn new(host: &str, port: u16) -> Result<Self, BackendError> {
        let base_url = format!("http://{host}:{port}");

        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| BackendError::ClientBuild(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read WAV bytes from a synthesis response.
    fn read_audio(response: reqwest::blocking::Response) -> Result<Vec<u8>, BackendError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(BackendError::RequestFailed(format!("Status: {status} {body}")));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

impl Backend for HttpBackend {
    fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/tts", self.base_url);
        log::debug!("POST {url} ({} chars)", request.text.chars().count());

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Self::read_audio(response)
    }

    fn clone_voice(
        &self,
        audio_path: &Path,
        request: &SynthesizeRequest,
    ) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/tts/clone", self.base_url);
        log::debug!("POST {url} with reference {}", audio_path.display());

        let audio_data = std::fs::read(audio_path)
            .map_err(|_| BackendError::FileNotFound(audio_path.display().to_string()))?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("speaker.wav");

        let file_part = reqwest::blocking::multipart::Part::bytes(audio_data)
            .file_name(file_name.to_string())
            .mime_str("audio/wav")
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let form = reqwest::blocking::multipart::Form::new()
            .part("speaker_wav", file_part)
            .text("text", request.text.clone())
            .text("language", request.language.clone());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        Self::read_audio(response)
    }
}
