//! Core types shared across the note CLI.

/// NoteId: position of a node in the flat list of one indexing pass.
///
/// The root directory is always 0; notes are numbered from 1 in walk order.
pub type NoteId = usize;

/// Index of a node inside a `NoteTree` arena.
pub type NodeIndex = usize;

/// Id reserved for the root directory.
pub const ROOT_ID: NoteId = 0;

/// Arena index of the root directory in every `NoteTree`.
pub const ROOT_INDEX: NodeIndex = 0;
