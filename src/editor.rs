//! Launch the configured editor on a note.

use crate::error::NoteError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Open `path` with `editor` and wait for it to exit.
///
/// `editor` may carry arguments (`"code --wait"`); the path is appended last.
/// The editor inherits the terminal.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<(), NoteError> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NoteError::Editor("no editor configured".to_string()))?;

    debug!(editor = %editor, path = %path.display(), "Opening editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| {
            NoteError::Editor(format!(
                "Failed to open {} with {}: {}",
                path.display(),
                editor,
                e
            ))
        })?;

    if !status.success() {
        return Err(NoteError::Editor(format!(
            "{} exited with {} while editing {}",
            editor,
            status,
            path.display()
        )));
    }
    Ok(())
}
