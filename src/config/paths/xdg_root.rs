//! Platform directory lookups for the note CLI.

use std::path::{Path, PathBuf};

/// Folder under the home directory used when `NOTE_PATH` is not set.
pub const DEFAULT_BASE_DIR: &str = "notes";

pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// `<home>/notes`
pub fn default_base_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_BASE_DIR)
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "note")
}

/// Platform config file, e.g. `~/.config/note/config.toml` on Linux.
pub fn config_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Platform state directory for the log file, falling back to the data
/// directory where no state directory exists.
pub fn state_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}
