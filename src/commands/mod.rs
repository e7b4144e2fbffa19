//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod header;
pub mod map;
pub mod print;
pub mod styles;
