//! mnk CLI - Engine toolkit for m,n,k games
//!
//! This CLI provides a unified interface for:
//! - Analyzing positions and asking the engine for its move
//! - Running engine-versus-opponent duels

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mnk")]
#[command(version, about = "Engine toolkit for m,n,k games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position and report the engine's move
    Analyze(mnkgame::cli::commands::analyze::AnalyzeArgs),

    /// Run an engine-versus-opponent match series
    Duel(mnkgame::cli::commands::duel::DuelArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => mnkgame::cli::commands::analyze::execute(args),
        Commands::Duel(args) => mnkgame::cli::commands::duel::execute(args),
    }
}
