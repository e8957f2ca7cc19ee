//! Note tree: indexing, traversal policy, and rendering.

pub mod builder;
pub mod node;
pub mod render;
pub mod walker;

pub use builder::{build_tree, NoteTree, TreeBuilder};
pub use node::{NodeKind, NoteNode};
pub use walker::{DirectoryFilter, WalkPolicy};
