use note::config::NoteConfig;
use note::tooling::cli::CliContext;
use std::fs;
use std::path::Path;

/// Create an empty file (and its parents) under `base`.
pub fn touch(base: &Path, rel: &str) {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// A context over `base` that never launches a real editor or commits.
pub fn context(base: &Path) -> CliContext {
    let mut config = NoteConfig::with_base(base);
    config.editor = if cfg!(windows) { "cmd /c exit 0" } else { "true" }.to_string();
    config.git.auto_commit = false;
    CliContext::new(config)
}
