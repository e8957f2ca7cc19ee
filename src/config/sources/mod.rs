//! Inputs the config merge reads from.

pub mod editor;
pub mod environment;
pub mod global_file;

use crate::config::paths::xdg_root;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Everything configuration is derived from, captured once.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config file to read
    pub file: Option<PathBuf>,
    /// Whether a missing `file` is an error (true for `--config`)
    pub file_required: bool,
    /// Environment variables
    pub env: HashMap<String, String>,
    /// Home directory used for the default base path
    pub home: Option<PathBuf>,
}

impl ConfigSources {
    /// Capture the process environment. An explicit `config_path` must exist;
    /// otherwise the platform config file is used when present.
    pub fn from_process(config_path: Option<&Path>) -> Self {
        let (file, file_required) = match config_path {
            Some(path) => (Some(path.to_path_buf()), true),
            None => (xdg_root::config_file_path(), false),
        };
        Self {
            file,
            file_required,
            env: std::env::vars().collect(),
            home: xdg_root::home_dir(),
        }
    }
}
