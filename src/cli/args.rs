//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::backend::DEFAULT_PORT;
use crate::pipeline::GenerateRequest;

/// Polish audiobook generator using XTTS-v2.
#[derive(Parser, Debug)]
#[command(name = "audiobook-rs")]
#[command(about = "Polish audiobook generator using XTTS-v2")]
#[command(version)]
#[command(after_help = "Examples:
  audiobook-rs input.txt output.mp3
  audiobook-rs input.txt output.mp3 --voice-name \"Ana Florence\"
  audiobook-rs input.txt output.mp3 --voice-file speaker.wav
  audiobook-rs --list-speakers")]
pub struct Args {
    /// Input text file (.txt)
    pub input_txt: Option<PathBuf>,

    /// Output audio file (.mp3)
    pub output_mp3: Option<PathBuf>,

    /// WAV file for voice cloning (6+ seconds recommended)
    #[arg(long)]
    pub voice_file: Option<PathBuf>,

    /// Predefined speaker name
    #[arg(long)]
    pub voice_name: Option<String>,

    /// List all available predefined voices
    #[arg(long)]
    pub list_speakers: bool,

    /// XTTS-v2 server host
    #[arg(long, env = "AUDIOBOOK_TTS_HOST", default_value = "localhost")]
    pub host: String,

    /// XTTS-v2 server port
    #[arg(long, env = "AUDIOBOOK_TTS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the ffmpeg binary
    #[arg(long, env = "AUDIOBOOK_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors in the combination of arguments given.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Cannot use both --voice-file and --voice-name. Choose one.")]
    ConflictingVoiceOptions,

    #[error("Missing required argument: {0}")]
    MissingPositional(&'static str),
}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListSpeakers,
    Generate(GenerateRequest),
}

impl Args {
    /// Validate the arguments and decide what to do.
    ///
    /// `--list-speakers` wins over everything else. Otherwise both
    /// positionals are required and the two voice options are exclusive.
    pub fn action(&self) -> Result<Action, ArgsError> {
        if self.list_speakers {
            return Ok(Action::ListSpeakers);
        }

        let input = self
            .input_txt
            .clone()
            .ok_or(ArgsError::MissingPositional("input_txt"))?;
        let output = self
            .output_mp3
            .clone()
            .ok_or(ArgsError::MissingPositional("output_mp3"))?;

        if self.voice_file.is_some() && self.voice_name.is_some() {
            return Err(ArgsError::ConflictingVoiceOptions);
        }

        Ok(Action::Generate(GenerateRequest {
            input,
            output,
            voice_file: self.voice_file.clone(),
            voice_name: self.voice_name.clone(),
        }))
    }
}
