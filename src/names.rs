//! Note file names: random names and suffix handling.

use crate::error::NoteError;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated names when a note is created without a title.
pub const RANDOM_NAME_LEN: usize = 5;

pub const NOTE_SUFFIX: &str = ".md";

/// Random alphanumeric name (`[a-zA-Z0-9]{len}`).
pub fn random_name(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Append `.md` unless the name already ends with it.
pub fn with_note_suffix(name: &str) -> String {
    if name.ends_with(NOTE_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, NOTE_SUFFIX)
    }
}

/// Turn user input into a note file name.
///
/// Names stay inside their folder: separators and `..` are rejected.
pub fn note_file_name(name: &str) -> Result<String, NoteError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == NOTE_SUFFIX {
        return Err(NoteError::InvalidName("name is empty".to_string()));
    }
    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(NoteError::InvalidName(format!(
            "{} must not contain path separators",
            trimmed
        )));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(NoteError::InvalidName(trimmed.to_string()));
    }
    Ok(with_note_suffix(trimmed))
}
