//! Platform directories.

pub mod xdg_root;
