//! Note command service: one entry point per note operation.
//!
//! Owns the filesystem side of each command; the CLI parses arguments, calls
//! one method, and formats the result.

use crate::error::NoteError;
use crate::names::{note_file_name, random_name, RANDOM_NAME_LEN};
use crate::tree::builder::NoteTree;
use crate::tree::node::NoteNode;
use crate::types::{NoteId, ROOT_ID};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Folder name format for dated note folders.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub struct NoteCommandService;

/// Result of a rename.
#[derive(Debug, Clone)]
pub struct RenameResult {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl NoteCommandService {
    /// Folder for notes created on `day`.
    pub fn day_dir(base: &Path, day: NaiveDate) -> PathBuf {
        base.join(day.format(DAY_FORMAT).to_string())
    }

    /// Create an empty note `<base>/<day>/<name>.md`.
    ///
    /// A missing or blank name gets a random one. An existing file is left
    /// untouched and its path returned.
    pub fn create(base: &Path, name: Option<&str>, day: NaiveDate) -> Result<PathBuf, NoteError> {
        let dir = Self::day_dir(base, day);
        std::fs::create_dir_all(&dir).map_err(|e| NoteError::filesystem(&dir, e))?;

        let file_name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => note_file_name(name)?,
            None => note_file_name(&random_name(RANDOM_NAME_LEN))?,
        };
        let path = dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => info!(path = %path.display(), "Created note"),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                warn!(path = %path.display(), "Note already exists, reusing it")
            }
            Err(e) => return Err(NoteError::filesystem(&path, e)),
        }
        Ok(path)
    }

    /// Look up an addressable note by id.
    pub fn resolve(tree: &NoteTree, id: NoteId) -> Result<&NoteNode, NoteError> {
        if tree.is_empty() {
            return Err(NoteError::NoNotes);
        }
        if id == ROOT_ID {
            return Err(NoteError::IdOutOfRange {
                id,
                count: tree.note_count(),
            });
        }
        tree.note(id).ok_or(NoteError::IdOutOfRange {
            id,
            count: tree.note_count(),
        })
    }

    /// Rename note `id` within its folder.
    pub fn rename(tree: &NoteTree, id: NoteId, new_name: &str) -> Result<RenameResult, NoteError> {
        let note = Self::resolve(tree, id)?;
        let file_name = note_file_name(new_name)?;
        let from = note.path.clone();
        let to = match from.parent() {
            Some(dir) => dir.join(&file_name),
            None => PathBuf::from(&file_name),
        };
        if to == from {
            return Ok(RenameResult { from, to });
        }
        if to.exists() {
            return Err(NoteError::AlreadyExists(to));
        }
        std::fs::rename(&from, &to).map_err(|e| NoteError::filesystem(&from, e))?;
        info!(from = %from.display(), to = %to.display(), "Renamed note");
        Ok(RenameResult { from, to })
    }

    /// Delete note `id`.
    pub fn remove(tree: &NoteTree, id: NoteId) -> Result<PathBuf, NoteError> {
        let path = Self::resolve(tree, id)?.path.clone();
        std::fs::remove_file(&path).map_err(|e| NoteError::filesystem(&path, e))?;
        info!(path = %path.display(), "Removed note");
        Ok(path)
    }

    /// Remove empty first-level folders, returning their names.
    ///
    /// Folders that cannot be inspected or removed are skipped with a warning.
    pub fn prune_empty_folders(base: &Path) -> Result<Vec<String>, NoteError> {
        let entries = std::fs::read_dir(base).map_err(|e| NoteError::filesystem(base, e))?;

        let mut removed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| NoteError::filesystem(base, e))?;
            let path = entry.path();
            if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            let is_empty = match std::fs::read_dir(&path) {
                Ok(mut contents) => contents.next().is_none(),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not inspect folder");
                    continue;
                }
            };
            if !is_empty {
                continue;
            }
            if let Err(e) = std::fs::remove_dir(&path) {
                warn!(path = %path.display(), error = %e, "Could not remove empty folder");
                continue;
            }
            removed.push(entry.file_name().to_string_lossy().into_owned());
        }
        removed.sort();
        Ok(removed)
    }
}
