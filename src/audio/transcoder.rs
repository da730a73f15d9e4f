//! WAV to MP3 transcoding.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors that can occur while producing the final MP3.
#[derive(Error, Debug)]
pub enum TranscodeError {
    #[error("Invalid WAV file {path}: {source}")]
    InvalidWav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("ffmpeg not found at '{0}'. Install ffmpeg or pass --ffmpeg")]
    FfmpegNotFound(String),

    #[error("ffmpeg exited with code {code:?}: {stderr}")]
    FfmpegFailed { code: Option<i32>, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Converts the intermediate WAV into the final compressed file.
#[cfg_attr(test, mockall::automock)]
pub trait Transcoder {
    /// Encode `wav` into `output`, overwriting it.
    ///
    /// # Returns
    /// Duration of the audio in seconds
    fn transcode(&self, wav: &Path, output: &Path) -> Result<f64, TranscodeError>;
}

/// Duration in seconds of the WAV file at `path`.
pub fn wav_duration(path: &Path) -> Result<f64, TranscodeError> {
    let reader = hound::WavReader::open(path).map_err(|source| TranscodeError::InvalidWav {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = reader.spec();
    // duration() counts samples per channel
    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}

/// MP3 encoder backed by the `ffmpeg` binary and libmp3lame.
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, wav: &Path, output: &Path) -> Result<f64, TranscodeError> {
        let duration = wav_duration(wav)?;

        log::debug!("Encoding {} -> {}", wav.display(), output.display());

        let result = Command::new(&self.program)
            .args(["-y", "-hide_banner", "-loglevel", "error", "-i"])
            .arg(wav)
            .args(["-vn", "-codec:a", "libmp3lame", "-f", "mp3"])
            .arg(output)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TranscodeError::FfmpegNotFound(self.program.clone())
                } else {
                    TranscodeError::Io(e)
                }
            })?;

        if !result.status.success() {
            return Err(TranscodeError::FfmpegFailed {
                code: result.status.code(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(duration)
    }
}
