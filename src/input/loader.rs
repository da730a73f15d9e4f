//! Source text loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading the source document.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    #[error("Input file is empty: {0}")]
    Empty(PathBuf),

    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trimmed, non-empty text of the document to narrate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText(String);

impl SourceText {
    /// Load and trim the text at `path`.
    ///
    /// # Returns
    /// * `Err(InputError::NotFound)` if the path does not exist
    /// * `Err(InputError::Empty)` if the content is only whitespace
    pub fn load(path: &Path) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::NotFound(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = raw.trim();
        if text.is_empty() {
            return Err(InputError::Empty(path.to_path_buf()));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
