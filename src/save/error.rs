//! Error types for saving an image to disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the image file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The overwrite confirmation could not be read.
    #[error("failed to read user input: {source}")]
    PromptRead {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The user declined to overwrite an existing file.
    #[error("user cancelled: '{path}' was not overwritten")]
    Cancelled {
        /// The file that was left untouched.
        path: PathBuf,
    },

    /// The destination file could not be created or truncated.
    #[error("failed to create file {path}: {source}")]
    Create {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The body stream or the file write failed part way through.
    #[error("failed to save image to {path}: {source}")]
    Copy {
        /// The destination path, which may hold a partial file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// Creates a prompt read error.
    #[must_use]
    pub fn prompt_read(source: std::io::Error) -> Self {
        Self::PromptRead { source }
    }

    /// Creates a cancellation error.
    pub fn cancelled(path: impl Into<PathBuf>) -> Self {
        Self::Cancelled { path: path.into() }
    }

    /// Creates a file creation error.
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    /// Creates a copy error.
    pub fn copy(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Copy {
            path: path.into(),
            source,
        }
    }
}
