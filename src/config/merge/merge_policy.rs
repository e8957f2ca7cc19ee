//! Built-in defaults applied beneath every other source.

use crate::config::paths::xdg_root;
use crate::config::{DEFAULT_EDITOR, DEFAULT_NOTE_NAME};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use std::path::Path;

/// Builder seeded with defaults. `path` is only defaulted when a home
/// directory is known.
pub fn builder_with_defaults(
    home: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("editor", DEFAULT_EDITOR)?
        .set_default("default_note", DEFAULT_NOTE_NAME)?;
    if let Some(home) = home {
        let base = xdg_root::default_base_path(home);
        builder = builder.set_default("path", base.to_string_lossy().into_owned())?;
    }
    Ok(builder)
}
