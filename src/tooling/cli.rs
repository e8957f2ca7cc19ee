//! CLI Tooling
//!
//! Command-line interface for the note tool. Every command that addresses a
//! note by number rebuilds the tree first, so ids always match the most
//! recent `note list` of an unchanged directory.

use crate::config::NoteConfig;
use crate::editor::open_in_editor;
use crate::error::NoteError;
use crate::git::GitRepo;
use crate::logging::LoggingConfig;
use crate::notes::NoteCommandService;
use crate::tree::builder::{build_tree, NoteTree};
use crate::tree::render::{list_entries, render_tree};
use crate::types::NoteId;
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};
use tracing::info;

/// Note CLI - dated markdown notes with optional git history
#[derive(Parser, Debug)]
#[command(name = "note")]
#[command(about = "A note-taking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Id of the note to open (see `note list`); omit to open the default note
    pub id: Option<NoteId>,

    /// Configuration file path (overrides the platform config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; a bare `note [ID]` means `open`.
    pub fn resolved_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Open { id: self.id })
    }

    /// Fold logging flags into the loaded config.
    pub fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open a note in the editor (the default note when no id is given)
    Open {
        /// Note id from `note list`
        id: Option<NoteId>,
    },
    /// Create a note in today's folder and open it
    New {
        /// Note title, without the .md extension (prompted for when omitted)
        title: Option<String>,
        /// Create the file without opening the editor
        #[arg(long)]
        no_edit: bool,
    },
    /// List all notes
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Rename a note inside its folder
    Rename {
        /// Note id from `note list`
        id: NoteId,
        /// New name; ".md" is appended when missing
        new_name: String,
    },
    /// Remove a note
    Rm {
        /// Note id from `note list`
        id: NoteId,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Initialize the base folder as a git repository
    Init {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Remove empty first-level folders
    Clean,
    /// Stash uncommitted changes in the base folder
    Stash {
        /// Stash message
        message: Option<String>,
    },
}

/// CLI context holding the configuration for one invocation.
pub struct CliContext {
    config: NoteConfig,
    color: bool,
}

impl CliContext {
    pub fn new(config: NoteConfig) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Enable ANSI colors in rendered output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &NoteConfig {
        &self.config
    }

    fn base(&self) -> &Path {
        &self.config.path
    }

    fn tree(&self) -> Result<NoteTree, NoteError> {
        build_tree(self.base(), &self.config.walk)
    }

    fn repo(&self) -> GitRepo {
        GitRepo::new(self.base())
    }

    /// Commit the base folder after a mutation, when enabled and under git.
    fn record(&self, message: &str) -> Result<(), NoteError> {
        if !self.config.git.auto_commit {
            return Ok(());
        }
        let repo = self.repo();
        if !repo.is_repo()? {
            return Ok(());
        }
        repo.commit_all(message)?;
        Ok(())
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(self.base())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, NoteError> {
        match command {
            Commands::Open { id } => self.handle_open(*id),
            Commands::New { title, no_edit } => self.handle_new(title.as_deref(), *no_edit),
            Commands::List { format } => self.handle_list(format),
            Commands::Rename { id, new_name } => self.handle_rename(*id, new_name),
            Commands::Rm { id, yes } => self.handle_remove(*id, *yes),
            Commands::Init { yes } => self.handle_init(*yes),
            Commands::Clean => self.handle_clean(),
            Commands::Stash { message } => self.handle_stash(message.as_deref()),
        }
    }

    fn handle_open(&self, id: Option<NoteId>) -> Result<String, NoteError> {
        let path = match id {
            Some(id) => {
                let tree = self.tree()?;
                NoteCommandService::resolve(&tree, id)?.path.clone()
            }
            None => {
                std::fs::create_dir_all(self.base())
                    .map_err(|e| NoteError::filesystem(self.base(), e))?;
                self.config.default_note_path()
            }
        };
        open_in_editor(&self.config.editor, &path)?;
        self.record(&format!("edit {}", self.display_name(&path)))?;
        Ok(String::new())
    }

    fn handle_new(&self, title: Option<&str>, no_edit: bool) -> Result<String, NoteError> {
        let mut output = Vec::new();
        let prompted;
        let title = match title {
            Some(title) => Some(title),
            None => {
                prompted = Input::<String>::new()
                    .with_prompt("Please provide a name (without .md extension)")
                    .allow_empty(true)
                    .interact_text()?;
                if prompted.trim().is_empty() {
                    output.push("Note: empty input leads to a random name.".to_string());
                }
                Some(prompted.as_str())
            }
        };

        let today = chrono::Local::now().date_naive();
        let path = NoteCommandService::create(self.base(), title, today)?;
        output.push(format!("Created new note: {}", path.display()));
        if !no_edit {
            open_in_editor(&self.config.editor, &path)?;
        }
        self.record(&format!("new {}", self.display_name(&path)))?;
        Ok(output.join("\n"))
    }

    fn handle_list(&self, format: &str) -> Result<String, NoteError> {
        let tree = self.tree()?;
        match format {
            "json" => serde_json::to_string_pretty(&list_entries(&tree))
                .map_err(|e| NoteError::ConfigError(format!("Failed to encode notes: {}", e))),
            "text" => Ok(render_tree(&tree, self.color).trim_end().to_string()),
            other => Err(NoteError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_rename(&self, id: NoteId, new_name: &str) -> Result<String, NoteError> {
        let tree = self.tree()?;
        let result = NoteCommandService::rename(&tree, id, new_name)?;
        let (from, to) = (self.display_name(&result.from), self.display_name(&result.to));
        self.record(&format!("rename {} -> {}", from, to))?;
        Ok(format!("Renamed {} -> {}", from, to))
    }

    fn handle_remove(&self, id: NoteId, yes: bool) -> Result<String, NoteError> {
        let tree = self.tree()?;
        let path = NoteCommandService::resolve(&tree, id)?.path.clone();
        if !yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Are you sure to delete {}?", path.display()))
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok("Aborted.".to_string());
            }
        }
        let removed = NoteCommandService::remove(&tree, id)?;
        let name = self.display_name(&removed);
        self.record(&format!("remove {}", name))?;
        Ok(format!("Removed {}", name))
    }

    fn handle_init(&self, yes: bool) -> Result<String, NoteError> {
        let repo = self.repo();
        if repo.is_repo()? {
            return Ok("The base folder is already a git repo.".to_string());
        }
        if !yes {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "It will initialize a git repo on the folder {}. Okay to continue?",
                    self.base().display()
                ))
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok("Aborted.".to_string());
            }
        }
        repo.init()?;
        repo.commit_all("initial commit")?;
        info!(base = %self.base().display(), "Initialized note repository");
        Ok(format!("Initialized git repo in {}", self.base().display()))
    }

    fn handle_clean(&self) -> Result<String, NoteError> {
        let removed = NoteCommandService::prune_empty_folders(self.base())?;
        if removed.is_empty() {
            return Ok("No empty folders.".to_string());
        }
        self.record(&format!("clean {}", removed.join(", ")))?;
        Ok(format!("Removed empty folders: {}", removed.join(", ")))
    }

    fn handle_stash(&self, message: Option<&str>) -> Result<String, NoteError> {
        if self.repo().stash(message)? {
            Ok("Stashed changes.".to_string())
        } else {
            Ok("No changes to stash.".to_string())
        }
    }
}
