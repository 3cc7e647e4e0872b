//! Clap argument definitions for the `facet` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "facet")]
#[command(about = "Faceted search box driver - parse, classify and replay search queries")]
pub struct Cli {
    /// Log more (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `facet` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Split a query into facet tokens
    Parse(ParseCommand),

    /// Show the search type, header and empty-result message for a query
    Classify(ClassifyCommand),

    /// Drive a search box with a script of edits and key presses
    Replay(ReplayCommand),

    /// Show effective configuration settings
    Config,

    /// Initialize facet configuration in the current directory
    Init(InitCommand),
}

impl Commands {
    /// Whether the command reads the merged configuration.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Arguments for `facet parse`.
#[derive(Args, Debug, Clone)]
pub struct ParseCommand {
    /// Query to parse
    pub query: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `facet classify`.
#[derive(Args, Debug, Clone)]
pub struct ClassifyCommand {
    /// Query to classify
    pub query: String,
}

/// How the replayed dispatcher reports its searches.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeArg {
    /// Ordinary queries
    #[default]
    General,
    /// Exact document lookups
    Specific,
    /// Documents related to `--document`
    Related,
}

/// Arguments for `facet replay`.
#[derive(Args, Debug, Clone)]
pub struct ReplayCommand {
    /// Script file, or `-` for stdin
    pub script: PathBuf,

    /// Result count reported when a search completes
    #[arg(short = 'n', long, default_value = "0")]
    pub count: usize,

    /// Keep searches outstanding until the script says `complete`
    #[arg(long)]
    pub outstanding: bool,

    /// Search mode reported by the dispatcher
    #[arg(long, value_enum, default_value_t)]
    pub mode: ModeArg,

    /// Reference document title for `--mode related`
    #[arg(long, default_value = "Untitled")]
    pub document: String,

    /// Print the final state as JSON instead of a transcript
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `facet init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.facet.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}
