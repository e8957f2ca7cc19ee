//! Render a note tree for `note list`.

use crate::tree::builder::NoteTree;
use crate::tree::node::NoteNode;
use crate::types::{NodeIndex, ROOT_INDEX};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Render the tree with box-drawing prefixes, children sorted by name.
///
/// Notes are prefixed with their id. With `color` off the output is plain text.
pub fn render_tree(tree: &NoteTree, color: bool) -> String {
    let mut out = String::new();
    if color {
        out.push_str(&format!("{}\n", "Notes:".bold().blue()));
    } else {
        out.push_str("Notes:\n");
    }
    render_children(tree, ROOT_INDEX, "", color, &mut out);
    out
}

fn render_children(tree: &NoteTree, index: NodeIndex, prefix: &str, color: bool, out: &mut String) {
    let children = tree.sorted_children(index);
    for (i, (child_index, child)) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        render_node(child, is_last, prefix, color, out);
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        render_children(tree, *child_index, &child_prefix, color, out);
    }
}

fn render_node(node: &NoteNode, is_last: bool, prefix: &str, color: bool, out: &mut String) {
    let branch = if is_last { "└── " } else { "├── " };
    let label = match (node.is_directory(), color) {
        (true, true) => format!("{}", node.name.bold().cyan()),
        (true, false) => node.name.clone(),
        (false, true) => format!(
            "{} {}",
            format!("({})", node.id.unwrap_or_default()).truecolor(175, 255, 95),
            node.name.green()
        ),
        (false, false) => format!("({}) {}", node.id.unwrap_or_default(), node.name),
    };
    out.push_str(&format!("{}{}{}\n", prefix, branch, label));
}

/// One note in the machine-readable listing.
#[derive(Debug, Clone, Serialize)]
pub struct NoteListEntry {
    pub id: usize,
    pub name: String,
    pub path: PathBuf,
}

/// Notes in id order, for `note list --format json`.
pub fn list_entries(tree: &NoteTree) -> Vec<NoteListEntry> {
    tree.notes()
        .map(|note| NoteListEntry {
            id: note.id.unwrap_or_default(),
            name: note.name.clone(),
            path: note.path.clone(),
        })
        .collect()
}
