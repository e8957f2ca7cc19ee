//! Note tree node types

use crate::types::{NodeIndex, NoteId};
use std::collections::HashMap;
use std::path::PathBuf;

/// What a node stands for on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    Note,
}

/// One entry of the indexed subtree.
#[derive(Debug, Clone)]
pub struct NoteNode {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    /// Child name to arena index. Unordered; renderers sort by name.
    pub children: HashMap<String, NodeIndex>,
    /// `Some(0)` for the root, `Some(n)` for notes, `None` for other directories.
    pub id: Option<NoteId>,
}

impl NoteNode {
    pub(crate) fn directory(name: String, path: PathBuf, id: Option<NoteId>) -> Self {
        Self {
            name,
            path,
            kind: NodeKind::Directory,
            children: HashMap::new(),
            id,
        }
    }

    pub(crate) fn note(name: String, path: PathBuf, id: NoteId) -> Self {
        Self {
            name,
            path,
            kind: NodeKind::Note,
            children: HashMap::new(),
            id: Some(id),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}
