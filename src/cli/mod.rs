//! CLI argument parsing and validation.

mod args;

pub use args::{Action, Args, ArgsError};

use crate::voice::{FEMALE_SPEAKERS, MALE_SPEAKERS};

/// Render the speaker catalog for `--list-speakers`.
pub fn speaker_listing() -> String {
    let mut out = String::from("Available speakers:\n");

    out.push_str("\nFemale voices:\n");
    for voice in FEMALE_SPEAKERS {
        out.push_str(&format!("  - {voice}\n"));
    }

    out.push_str("\nMale voices:\n");
    for voice in MALE_SPEAKERS {
        out.push_str(&format!("  - {voice}\n"));
    }

    out
}
