//! `EDITOR` source: the conventional editor variable, applied above the
//! config file.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Value};
use std::collections::HashMap;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    env: &HashMap<String, String>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    // A non-blank NOTE_EDITOR is more specific and is applied by the environment source.
    if env
        .get("NOTE_EDITOR")
        .is_some_and(|e| !e.trim().is_empty())
    {
        return Ok(builder);
    }
    let editor = env
        .get("EDITOR")
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(|e| Value::from(e.to_string()));
    builder.set_override_option("editor", editor)
}
