//! Sojourn CLI - Rolling-Window Stay Compliance
//!
//! Operational entry point for the sojourn stay-tracking library.
//!
//! # Commands
//!
//! - `sojourn check --history <file>` - Check a recorded history
//!   against the rolling-window rule
//! - `sojourn plan --history <file> --duration <days>` - Find the
//!   soonest compliant stay of the requested length
//! - `sojourn demo` - Run the built-in sample scenario
//!
//! Rule parameters come from flags, then the configuration file, then
//! the built-in 90-in-180 defaults, in that order of precedence.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::CliConfig;
use sojourn_core::planner::SearchConfig;
use sojourn_core::types::StayRule;

/// Sojourn rolling-window stay compliance CLI
#[derive(Parser)]
#[command(name = "sojourn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sojourn.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a recorded stay history against the rolling-window rule
    Check {
        /// Path to the history file (JSON array of {begin, end} stays)
        #[arg(short = 'H', long)]
        history: PathBuf,

        /// Rolling window length in days
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        window: Option<u32>,

        /// Allowed days per window
        #[arg(short, long)]
        budget: Option<u32>,
    },

    /// Find the soonest compliant stay of a given length
    Plan {
        /// Path to the history file (JSON array of {begin, end} stays)
        #[arg(short = 'H', long)]
        history: PathBuf,

        /// Desired stay length in days
        #[arg(short, long)]
        duration: u32,

        /// Rolling window length in days
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        window: Option<u32>,

        /// Allowed days per window
        #[arg(short, long)]
        budget: Option<u32>,

        /// Maximum days past the last stay to search
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        horizon: Option<u32>,
    },

    /// Run the built-in sample scenario
    Demo,
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load_or_default(&cli.config).map_err(CliError::Config)?;

    match cli.command {
        Commands::Check {
            history,
            window,
            budget,
        } => {
            let rule = StayRule::new(
                window.unwrap_or(config.window_days),
                budget.unwrap_or(config.allowed_days),
            )
            .map_err(CliError::Rule)?;
            commands::check::run(&history, &rule)?;
        }
        Commands::Plan {
            history,
            duration,
            window,
            budget,
            horizon,
        } => {
            let rule = StayRule::new(
                window.unwrap_or(config.window_days),
                budget.unwrap_or(config.allowed_days),
            )
            .map_err(CliError::Rule)?;
            let search = SearchConfig::new(horizon.unwrap_or(config.max_horizon_days));
            commands::plan::run(&history, duration, &rule, search)?;
        }
        Commands::Demo => commands::demo::run()?,
    }

    Ok(())
}
