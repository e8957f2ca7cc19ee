//! Error types for the note CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by indexing, note commands, and their collaborators.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Base directory missing, unreadable, or an entry failed mid-walk.
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot express {} relative to {}", .path.display(), .base.display())]
    PathRelativization { path: PathBuf, base: PathBuf },

    #[error(
        "Note id {id} is out of range. Run `note list` and pick an id between 1 and {count}."
    )]
    IdOutOfRange { id: usize, count: usize },

    #[error("No notes found. Create one with `note new`.")]
    NoNotes,

    #[error("Invalid note name: {0}")]
    InvalidName(String),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("{command} failed: {output}")]
    Git { command: String, output: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl NoteError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NoteError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for NoteError {
    fn from(err: config::ConfigError) -> Self {
        NoteError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for NoteError {
    fn from(err: dialoguer::Error) -> Self {
        NoteError::Prompt(err.to_string())
    }
}

impl From<walkdir::Error> for NoteError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        NoteError::Filesystem {
            path,
            source: err.into(),
        }
    }
}
