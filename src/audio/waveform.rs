//! Intermediate WAV file handling.

use std::io;
use std::path::{Path, PathBuf};

/// Derive the intermediate WAV path from the final output path.
///
/// The final extension is replaced with `_temp.wav`, so `book.mp3`
/// becomes `book_temp.wav` next to it.
pub fn temp_wav_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audiobook".to_string());

    output.with_file_name(format!("{stem}_temp.wav"))
}

/// Synthesized audio waiting to be transcoded.
///
/// Owns the file on disk: it is removed when the guard is dropped, whether
/// the run succeeded or not.
#[derive(Debug)]
pub struct IntermediateWaveform {
    path: PathBuf,
}

impl IntermediateWaveform {
    /// Write `audio` to `path` and take ownership of the file.
    ///
    /// A partially written file is removed if the write fails.
    pub fn write(path: PathBuf, audio: &[u8]) -> io::Result<Self> {
        let waveform = Self { path };
        std::fs::write(&waveform.path, audio)?;
        Ok(waveform)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for IntermediateWaveform {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Removed intermediate file {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "Failed to remove intermediate file {}: {e}",
                self.path.display()
            ),
        }
    }
}
