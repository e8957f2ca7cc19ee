//! Integration tests for the note CLI

mod cli_commands;
mod cli_parse;
mod support;
mod tree_properties;
