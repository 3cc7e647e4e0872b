//! Command implementations and dispatch.

pub mod classify;
pub mod config;
pub mod init;
pub mod parse;
pub mod replay;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Parse(cmd) => parse::run(&cmd),
        Commands::Classify(cmd) => classify::run(ctx, &cmd),
        Commands::Replay(cmd) => replay::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
