//! Note: dated markdown notes from the command line
//!
//! Notes live under a base directory as `<YYYY-MM-DD>/<name>.md`. The tree
//! indexer numbers them so they can be opened, renamed, and removed by id,
//! and the base directory can optionally be kept under git.

pub mod config;
pub mod editor;
pub mod error;
pub mod git;
pub mod logging;
pub mod names;
pub mod notes;
pub mod tooling;
pub mod tree;
pub mod types;
