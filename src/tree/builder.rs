//! Note tree builder: walks the base directory and indexes notes.

use crate::error::NoteError;
use crate::tree::node::{NodeKind, NoteNode};
use crate::tree::walker::WalkPolicy;
use crate::types::{NodeIndex, NoteId, ROOT_ID, ROOT_INDEX};
use std::path::{Component, Path};
use tracing::debug;
use walkdir::WalkDir;

/// Result of one indexing pass.
///
/// All nodes live in an arena owned by the tree. Directory children and the
/// flat id list both hold arena indices, so `note(id)` and a walk from the
/// root always see the same node.
#[derive(Debug, Clone)]
pub struct NoteTree {
    nodes: Vec<NoteNode>,
    flat: Vec<NodeIndex>,
}

impl NoteTree {
    fn with_root(root: NoteNode) -> Self {
        Self {
            nodes: vec![root],
            flat: vec![ROOT_INDEX],
        }
    }

    pub fn root(&self) -> &NoteNode {
        &self.nodes[ROOT_INDEX]
    }

    /// Look up a node by id. `note(0)` is the root.
    pub fn note(&self, id: NoteId) -> Option<&NoteNode> {
        self.flat.get(id).map(|&index| &self.nodes[index])
    }

    /// Length of the flat list: one plus the number of notes.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.note_count() == 0
    }

    pub fn note_count(&self) -> usize {
        self.flat.len() - 1
    }

    /// Notes in id order, root excluded.
    pub fn notes(&self) -> impl Iterator<Item = &NoteNode> {
        self.flat[1..].iter().map(move |&index| &self.nodes[index])
    }

    /// Children of the node at `index` sorted by name, with their arena
    /// indices. An index outside this tree has no children.
    pub fn sorted_children(&self, index: NodeIndex) -> Vec<(NodeIndex, &NoteNode)> {
        let Some(node) = self.nodes.get(index) else {
            return Vec::new();
        };
        let mut children: Vec<(NodeIndex, &NoteNode)> = node
            .children
            .values()
            .map(|&child| (child, &self.nodes[child]))
            .collect();
        children.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        children
    }

    /// Insert an entry by its relative segments, creating missing
    /// intermediate directories. Existing nodes are reused, so a revisited
    /// note keeps its first id.
    fn insert(&mut self, segments: &[String], kind: NodeKind) {
        let mut current = ROOT_INDEX;
        let last = segments.len().saturating_sub(1);
        for (i, segment) in segments.iter().enumerate() {
            if let Some(&existing) = self.nodes[current].children.get(segment) {
                current = existing;
                continue;
            }

            let path = self.nodes[current].path.join(segment);
            let index = self.nodes.len();
            let node = if i == last && kind == NodeKind::Note {
                let id = self.flat.len();
                self.flat.push(index);
                NoteNode::note(segment.clone(), path, id)
            } else {
                NoteNode::directory(segment.clone(), path, None)
            };
            self.nodes.push(node);
            self.nodes[current]
                .children
                .insert(segment.clone(), index);
            current = index;
        }
    }
}

/// Builds `NoteTree`s under a walk policy.
pub struct TreeBuilder {
    policy: WalkPolicy,
}

impl TreeBuilder {
    pub fn new(policy: WalkPolicy) -> Self {
        Self { policy }
    }

    /// Walk `base` and index its notes.
    ///
    /// The walk is depth-first with siblings in file-name order, so an
    /// unchanged directory always yields the same ids. The first I/O error
    /// aborts the build; no partial tree is returned.
    pub fn build(&self, base: &Path) -> Result<NoteTree, NoteError> {
        let metadata = std::fs::metadata(base).map_err(|e| NoteError::filesystem(base, e))?;
        if !metadata.is_dir() {
            return Err(NoteError::filesystem(
                base,
                std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
            ));
        }

        let root_name = base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| base.to_string_lossy().into_owned());
        let mut tree = NoteTree::with_root(NoteNode::directory(
            root_name,
            base.to_path_buf(),
            Some(ROOT_ID),
        ));

        let policy = &self.policy;
        let mut walker = WalkDir::new(base)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let is_dir = entry.file_type().is_dir();
            let depth = entry.depth();
            let name = entry.file_name().to_string_lossy().into_owned();

            // walkdir has already opened a yielded directory; pruning drops its contents.
            if is_dir && !policy.should_descend(&name, is_dir, depth) {
                walker.skip_current_dir();
            }
            if !policy.admits(&name, is_dir, depth) {
                debug!(path = %entry.path().display(), "Skipping entry");
                continue;
            }

            let rel = entry.path().strip_prefix(base).map_err(|_| {
                NoteError::PathRelativization {
                    path: entry.path().to_path_buf(),
                    base: base.to_path_buf(),
                }
            })?;
            let segments = path_segments(rel);
            if segments.is_empty() || segments.len() > policy.max_depth {
                debug!(path = %entry.path().display(), "Skipping entry outside depth cap");
                continue;
            }

            let kind = if is_dir {
                NodeKind::Directory
            } else {
                NodeKind::Note
            };
            tree.insert(&segments, kind);
        }

        debug!(
            base = %base.display(),
            notes = tree.note_count(),
            "Indexed note tree"
        );
        Ok(tree)
    }
}

/// Walk `base` with `policy` and return the indexed tree.
pub fn build_tree(base: &Path, policy: &WalkPolicy) -> Result<NoteTree, NoteError> {
    TreeBuilder::new(policy.clone()).build(base)
}

fn path_segments(rel: &Path) -> Vec<String> {
    rel.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
