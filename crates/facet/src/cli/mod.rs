//! CLI support for the `facet` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;
pub mod script;

pub use context::CommandContext;
