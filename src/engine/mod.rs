//! Speech synthesis against the XTTS-v2 backend.
//!
//! This module turns the loaded text and the selected voice into the
//! intermediate WAV file that the transcoder consumes.

mod synthesizer;

pub use synthesizer::{LANGUAGE, SynthesisError, Synthesizer};
