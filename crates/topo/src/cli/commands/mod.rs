//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod interactive;
pub mod ls;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub async fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd).await,
        Commands::Ls(cmd) => ls::run(ctx, &cmd).await,
        Commands::Interactive(cmd) => interactive::run(ctx, &cmd).await,
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
