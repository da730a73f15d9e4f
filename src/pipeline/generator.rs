//! End-to-end audiobook generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::{TranscodeError, Transcoder};
use crate::backend::Backend;
use crate::engine::{LANGUAGE, SynthesisError, Synthesizer};
use crate::input::{InputError, SourceText};
use crate::voice::{VoiceError, select_voice};

/// Errors that can stop a generation run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Conversion to MP3 failed: {0}")]
    Transcode(#[from] TranscodeError),
}

/// What to generate in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub voice_file: Option<PathBuf>,
    pub voice_name: Option<String>,
}

/// The finished audiobook.
#[derive(Debug, Clone, PartialEq)]
pub struct Audiobook {
    pub path: PathBuf,
    pub duration_secs: f64,
}

/// Runs loader, voice selection, synthesis and transcoding in order.
pub struct AudiobookGenerator<B: Backend, T: Transcoder> {
    synthesizer: Synthesizer<B>,
    transcoder: T,
}

impl<B: Backend, T: Transcoder> AudiobookGenerator<B, T> {
    pub fn new(backend: B, transcoder: T) -> Self {
        Self {
            synthesizer: Synthesizer::new(backend),
            transcoder,
        }
    }

    /// Generate one audiobook.
    ///
    /// Input and voice problems are reported before the backend is contacted.
    /// The intermediate WAV is removed whether transcoding succeeds or not.
    pub fn generate(&self, request: &GenerateRequest) -> Result<Audiobook, PipelineError> {
        let text = SourceText::load(&request.input)?;
        let voice = select_voice(request.voice_file.as_deref(), request.voice_name.as_deref())?;

        self.synthesizer.probe_device()?;

        println!("Generating Polish audiobook ({LANGUAGE})...");
        println!("Input file: {}", request.input.display());
        println!("Text length: {} characters", text.char_count());
        println!("{}", voice.describe());

        let waveform = self
            .synthesizer
            .synthesize_to_file(&text, &voice, &request.output)?;

        println!("Converting to MP3: {}", request.output.display());
        let duration_secs = self.transcoder.transcode(waveform.path(), &request.output)?;
        drop(waveform);

        Ok(Audiobook {
            path: request.output.clone(),
            duration_secs,
        })
    }
}

impl Audiobook {
    /// Duration with two decimals, e.g. `12.34`.
    pub fn duration_display(&self) -> String {
        format!("{:.2}", self.duration_secs)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
