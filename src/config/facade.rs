//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::sources::ConfigSources;
use super::NoteConfig;
use crate::error::NoteError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment and the default or
    /// given config file.
    pub fn load(config_path: Option<&Path>) -> Result<NoteConfig, NoteError> {
        MergeService::load(&ConfigSources::from_process(config_path))
    }

    /// Load configuration from explicit sources.
    pub fn load_from(sources: &ConfigSources) -> Result<NoteConfig, NoteError> {
        MergeService::load(sources)
    }
}
