//! Config file source (TOML).

use super::ConfigSources;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    sources: &ConfigSources,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(path) = sources.file.as_ref() else {
        return Ok(builder);
    };
    Ok(builder.add_source(
        File::from(path.as_path())
            .format(FileFormat::Toml)
            .required(sources.file_required),
    ))
}
