//! tapgrid - terminal tic-tac-toe.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tapgrid::{AppConfig, GameSession, replay};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let filter = env_filter(&cli, &config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config, filter),
        Command::Replay { moves, json } => run_replay(&config, filter, &moves, json),
    }
}

/// Reads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(policy) = cli.decided_tap {
        config = config.with_decided_tap(policy);
    }
    Ok(config)
}

/// `--log-filter` beats `RUST_LOG`, which beats the config file.
fn env_filter(cli: &Cli, config: &AppConfig) -> Result<EnvFilter> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = config.log_directives(cli.log_filter.as_deref(), env.as_deref());
    EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter {directives:?}"))
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_tui(config: &AppConfig, filter: EnvFilter) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tapgrid::tui::run(config)
}

/// Run a headless replay and print the outcome.
fn run_replay(config: &AppConfig, filter: EnvFilter, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let steps = replay::parse_steps(moves.iter().map(String::as_str))
        .context("Invalid move list")?;
    debug!(?steps, "Parsed replay steps");

    let mut session = GameSession::with_policy(*config.decided_tap());
    let report = replay::run(&mut session, &steps);
    info!(score = %report.snapshot.score, "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
