//! Traversal policy for the note indexer.
//!
//! Every decision about which entries enter the tree lives here as a pure
//! predicate, so the builder only has to drive the walk.

use serde::{Deserialize, Serialize};

/// Which directory names are indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryFilter {
    /// Only names starting with an ASCII digit, matching the dated folders
    /// `note new` creates (`2024-01-01`).
    #[default]
    DigitPrefix,
    /// Any name that does not start with `.`.
    Visible,
}

fn default_max_depth() -> usize {
    2
}

/// Walk policy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkPolicy {
    /// Maximum number of path segments below the base directory
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Directory label filter
    #[serde(default)]
    pub directory_filter: DirectoryFilter,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            directory_filter: DirectoryFilter::default(),
        }
    }
}

impl WalkPolicy {
    /// Whether a directory name is an addressable label under this policy.
    pub fn is_addressable_label(&self, name: &str) -> bool {
        match self.directory_filter {
            DirectoryFilter::DigitPrefix => name
                .chars()
                .next()
                .map(|c| c.is_ascii_digit())
                .unwrap_or(false),
            DirectoryFilter::Visible => !name.is_empty() && !name.starts_with('.'),
        }
    }

    /// Literal `.md` suffix check; `README.MD` is not a note.
    pub fn is_note_file(name: &str) -> bool {
        name.ends_with(".md")
    }

    /// Whether an entry at `depth` (1 = direct child of the base) enters the tree.
    ///
    /// A rejected directory is pruned together with its subtree.
    pub fn admits(&self, name: &str, is_dir: bool, depth: usize) -> bool {
        if depth == 0 {
            return true;
        }
        if depth > self.max_depth {
            return false;
        }
        if is_dir {
            self.is_addressable_label(name)
        } else {
            Self::is_note_file(name)
        }
    }

    /// Whether the walk should read the contents of the entry at `depth`.
    pub fn should_descend(&self, name: &str, is_dir: bool, depth: usize) -> bool {
        is_dir && self.admits(name, is_dir, depth) && depth < self.max_depth
    }
}
