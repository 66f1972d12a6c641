//! Cannibal CLI - Channel-Cannibalization Scenario Analysis
//!
//! Operational entry point for the cannibal scenario engine.
//!
//! # Commands
//!
//! - `cannibal baseline --input rows.csv` - Baseline KPIs and derived rows
//! - `cannibal simulate --input rows.csv --scenario scenario.toml` - Run a
//!   what-if scenario and show the comparison views
//! - `cannibal channels --input rows.csv` - List the reducible channels
//!
//! Every command accepts `--sample` instead of `--input` to run against the
//! bundled demo dataset.
//!
//! # Architecture
//!
//! As the service layer of the A-K-S architecture, this crate orchestrates
//! the adapter and kernel layers behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod render;

pub use error::{CliError, Result};

/// Cannibal channel-shift scenario CLI
#[derive(Parser)]
#[command(name = "cannibal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute baseline KPIs and per-row metrics
    Baseline {
        /// Path to transaction CSV file
        #[arg(short, long)]
        input: Option<String>,

        /// Use the bundled demo dataset instead of a file
        #[arg(long)]
        sample: bool,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run a what-if scenario against the baseline
    Simulate {
        /// Path to transaction CSV file
        #[arg(short, long)]
        input: Option<String>,

        /// Use the bundled demo dataset instead of a file
        #[arg(long)]
        sample: bool,

        /// Path to scenario TOML file
        #[arg(short = 'c', long)]
        scenario: String,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the non-direct channels found in the input
    Channels {
        /// Path to transaction CSV file
        #[arg(short, long)]
        input: Option<String>,

        /// Use the bundled demo dataset instead of a file
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Baseline {
            input,
            sample,
            format,
        } => commands::baseline::run(input.as_deref(), sample, &format),
        Commands::Simulate {
            input,
            sample,
            scenario,
            format,
        } => commands::simulate::run(input.as_deref(), sample, &scenario, &format),
        Commands::Channels { input, sample } => commands::channels::run(input.as_deref(), sample),
    }
}
