//! Command-line interface for tapgrid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tapgrid::DecidedTapPolicy;

/// Tap-to-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tapgrid")]
#[command(about = "Tic-tac-toe with score tracking across rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to ./tapgrid.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What a tap on a won or drawn board does
    #[arg(long, global = true, value_enum)]
    pub decided_tap: Option<DecidedTapPolicy>,

    /// Log filter directive (overrides RUST_LOG and the config file)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a sequence of taps to a fresh session and print the result
    Replay {
        /// Taps as `row,column`, an index 0-8, a label, or `reset`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
}
