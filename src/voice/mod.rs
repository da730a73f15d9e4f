//! Voice catalog and voice selection.
//!
//! This module holds the fixed table of XTTS-v2 speaker identities and
//! decides, per run, whether the engine clones a reference recording or
//! speaks with a catalog voice.

mod catalog;
mod selection;

pub use catalog::{
    DEFAULT_SPEAKER, FEMALE_SPEAKERS, MALE_SPEAKERS, SpeakerResolution, all_speakers,
    find_speaker, resolve_speaker,
};
pub use selection::{VoiceError, VoiceSelection, select_voice};
