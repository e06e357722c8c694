//! Subcommands.

pub mod query;
pub mod settings;
pub mod table;
