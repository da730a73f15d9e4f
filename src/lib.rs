//! audiobook-rs: Polish audiobook generator.
//!
//! This crate turns a plain-text document into a narrated MP3 using the
//! XTTS-v2 multilingual voice model, either with one of its predefined
//! speakers or by cloning a voice from a short reference recording.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod engine;
pub mod input;
pub mod pipeline;
pub mod voice;
