//! Vanilla option pricer CLI
//!
//! Operational entry point for the closed-form, lattice and Monte Carlo
//! pricers.
//!
//! # Commands
//!
//! - `pricer european` - Black-Scholes price
//! - `pricer lattice --steps <N> [--american]` - Binomial lattice price
//! - `pricer simulate --paths <N> --seed <S>` - Monte Carlo estimate
//! - `pricer qq --format <table|csv|json>` - Normal QQ data of simulated payoffs
//! - `pricer compare` - All three pricers against the closed form
//! - `pricer check` - Print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate loads configuration, installs
//! the tracing subscriber and dispatches to the pricer crates. Logs go to
//! stderr; stdout carries only command output.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::compare::CompareArgs;
use commands::european::EuropeanArgs;
use commands::lattice::LatticeArgs;
use commands::qq::QqArgs;
use commands::simulate::SimulateArgs;
use config::{LogLevel, PricerConfig};

/// Vanilla option pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./pricer.toml when present)
    #[arg(short, long, global = true, env = "PRICER_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form Black-Scholes price
    European(EuropeanArgs),

    /// Cox-Ross-Rubinstein binomial lattice price
    Lattice(LatticeArgs),

    /// Monte Carlo price estimate
    Simulate(SimulateArgs),

    /// Normal QQ diagnostic of the simulated payoff sample
    Qq(QqArgs),

    /// Compare all pricers against the closed form
    Compare(CompareArgs),

    /// Check and print the effective configuration
    Check,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::European(_) => "european",
            Commands::Lattice(_) => "lattice",
            Commands::Simulate(_) => "simulate",
            Commands::Qq(_) => "qq",
            Commands::Compare(_) => "compare",
            Commands::Check => "check",
        }
    }

    fn run<W: Write>(&self, config: PricerConfig, out: &mut W) -> Result<()> {
        match self {
            Commands::European(args) => commands::european::run(args, config, out),
            Commands::Lattice(args) => commands::lattice::run(args, config, out),
            Commands::Simulate(args) => commands::simulate::run(args, config, out),
            Commands::Qq(args) => commands::qq::run(args, config, out),
            Commands::Compare(args) => commands::compare::run(args, config, out),
            Commands::Check => commands::check::run(&config, out),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        config::build_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.log_level = LogLevel::from_str(level)?;
    }

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    init_tracing(level.as_filter_str());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command.name(),
        "Starting pricer"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.command
        .run(config, &mut out)
        .with_context(|| format!("{} command failed", cli.command.name()))?;
    out.flush()?;

    Ok(())
}
