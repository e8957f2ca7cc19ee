//! Tooling & Integration Layer
//!
//! Command-line entry points for the note tool.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
