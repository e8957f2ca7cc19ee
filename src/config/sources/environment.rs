//! Environment variable source: NOTE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;
use std::collections::HashMap;

/// Add environment variable overlay to builder.
/// `NOTE_PATH` maps to `path`; `NOTE_GIT__AUTO_COMMIT` maps to `git.auto_commit`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    env: &HashMap<String, String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let vars: config::Map<String, String> = env
        .iter()
        .filter(|(key, _)| key.starts_with("NOTE_"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let builder = builder.add_source(
        Environment::with_prefix("NOTE")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
            .source(Some(vars)),
    );
    Ok(builder)
}
