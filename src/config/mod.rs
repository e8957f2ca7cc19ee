//! Configuration for the note CLI.
//!
//! Built once at process start and passed explicitly to the command layer.
//! Precedence (lowest to highest): built-in defaults, config file, `EDITOR`,
//! `NOTE_*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use sources::ConfigSources;

use crate::logging::LoggingConfig;
use crate::tree::walker::WalkPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_EDITOR: &str = "nvim";
pub const DEFAULT_NOTE_NAME: &str = "notes.md";

fn default_editor() -> String {
    DEFAULT_EDITOR.to_string()
}

fn default_note() -> String {
    DEFAULT_NOTE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Git behaviour for the note directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Commit after every mutating command when the base is a repository
    #[serde(default = "default_true")]
    pub auto_commit: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            auto_commit: default_true(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    /// Base directory holding the notes (`NOTE_PATH`)
    pub path: PathBuf,

    /// Editor command (`EDITOR`)
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Note opened by a bare `note`, relative to `path`
    #[serde(default = "default_note")]
    pub default_note: String,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub walk: WalkPolicy,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NoteConfig {
    /// Defaults rooted at `path`.
    pub fn with_base(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            editor: default_editor(),
            default_note: default_note(),
            git: GitConfig::default(),
            walk: WalkPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }

    pub fn default_note_path(&self) -> PathBuf {
        self.path.join(&self.default_note)
    }
}
