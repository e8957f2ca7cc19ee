//! MergeService: orchestrates sources, applies merge policy, deserializes to NoteConfig.

use crate::config::sources::{editor, environment, global_file, ConfigSources};
use crate::config::NoteConfig;
use crate::error::NoteError;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> config file -> EDITOR -> NOTE_* (highest).
    pub fn load(sources: &ConfigSources) -> Result<NoteConfig, NoteError> {
        let builder = merge_policy::builder_with_defaults(sources.home.as_deref())?;
        let builder = global_file::add_to_builder(builder, sources)?;
        let builder = editor::add_to_builder(builder, &sources.env)?;
        let builder = environment::add_to_builder(builder, &sources.env)?;

        let config = builder.build()?;
        if config.get_string("path").is_err() {
            return Err(NoteError::ConfigError(
                "No base directory: set NOTE_PATH or `path` in the config file".to_string(),
            ));
        }
        Ok(config.try_deserialize()?)
    }
}
