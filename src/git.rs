//! Git integration for the note directory.
//!
//! Thin wrappers around the `git` binary, run with the note directory as the
//! working directory.

use crate::error::NoteError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// A note directory that may or may not be a git repository.
#[derive(Debug, Clone)]
pub struct GitRepo {
    root: PathBuf,
}

impl GitRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `<root>/.git` exists and is a directory.
    pub fn is_repo(&self) -> Result<bool, NoteError> {
        let git_dir = self.root.join(".git");
        match std::fs::metadata(&git_dir) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(NoteError::filesystem(git_dir, e)),
        }
    }

    /// Create the directory if needed and run `git init`.
    ///
    /// Returns false when the directory already was a repository.
    pub fn init(&self) -> Result<bool, NoteError> {
        std::fs::create_dir_all(&self.root).map_err(|e| NoteError::filesystem(&self.root, e))?;
        if self.is_repo()? {
            return Ok(false);
        }
        self.run(&["init"])?;
        info!(root = %self.root.display(), "Initialized git repository");
        Ok(true)
    }

    /// Whether `git status --porcelain` reports anything.
    pub fn has_changes(&self) -> Result<bool, NoteError> {
        let output = self.run(&["status", "--porcelain"])?;
        Ok(!output.trim().is_empty())
    }

    /// Stage everything and commit with `message`.
    ///
    /// Returns false when there was nothing to commit.
    pub fn commit_all(&self, message: &str) -> Result<bool, NoteError> {
        self.ensure_repo()?;
        self.run(&["add", "."])?;
        if !self.has_changes()? {
            debug!(root = %self.root.display(), "Nothing to commit");
            return Ok(false);
        }
        self.run(&["commit", "-m", message])?;
        info!(message = %message, "Committed note changes");
        Ok(true)
    }

    /// Stash local changes, with an optional message.
    ///
    /// Returns false when there was nothing to stash.
    pub fn stash(&self, message: Option<&str>) -> Result<bool, NoteError> {
        self.ensure_repo()?;
        if !self.has_changes()? {
            return Ok(false);
        }
        match message {
            Some(msg) if !msg.is_empty() => self.run(&["stash", "push", "-m", msg])?,
            _ => self.run(&["stash"])?,
        };
        Ok(true)
    }

    fn ensure_repo(&self) -> Result<(), NoteError> {
        if !self.is_repo()? {
            return Err(NoteError::Git {
                command: "git".to_string(),
                output: format!("not a git repository: {}", self.root.display()),
            });
        }
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<String, NoteError> {
        let command = format!("git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| NoteError::Git {
                command: command.clone(),
                output: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            return Err(NoteError::Git {
                command,
                output: text.trim().to_string(),
            });
        }
        Ok(text)
    }
}
