//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands take the
//! effective configuration, apply their own flags on top, and write their
//! result to the given writer.

pub mod check;
pub mod compare;
pub mod european;
pub mod lattice;
pub mod output;
pub mod qq;
pub mod simulate;

use std::str::FromStr;

use clap::Args;
use pricer_core::types::OptionKind;

use crate::config::{ContractSettings, SimulationSettings};
use crate::Result;

/// Contract overrides shared by every pricing command
#[derive(Debug, Clone, Default, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Option kind (call or put)
    #[arg(long)]
    pub kind: Option<String>,
}

impl ContractArgs {
    /// Overwrite configured fields with the flags that were given
    pub fn apply(&self, settings: &mut ContractSettings) -> Result<()> {
        if let Some(spot) = self.spot {
            settings.spot = spot;
        }
        if let Some(strike) = self.strike {
            settings.strike = strike;
        }
        if let Some(maturity) = self.maturity {
            settings.maturity = maturity;
        }
        if let Some(rate) = self.rate {
            settings.rate = rate;
        }
        if let Some(volatility) = self.volatility {
            settings.volatility = volatility;
        }
        if let Some(kind) = &self.kind {
            settings.kind = OptionKind::from_str(kind)?;
        }
        Ok(())
    }
}

/// Simulation overrides shared by the Monte Carlo commands
#[derive(Debug, Clone, Default, Args)]
pub struct SimulationArgs {
    /// Number of Monte Carlo paths
    #[arg(short, long)]
    pub paths: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Paths drawn per generator batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Run all batches on the calling thread
    #[arg(long)]
    pub sequential: bool,
}

impl SimulationArgs {
    /// Overwrite configured fields with the flags that were given
    pub fn apply(&self, settings: &mut SimulationSettings) {
        if let Some(paths) = self.paths {
            settings.paths = paths;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(batch_size) = self.batch_size {
            settings.batch_size = batch_size;
        }
        if self.sequential {
            settings.parallel = false;
        }
    }
}
