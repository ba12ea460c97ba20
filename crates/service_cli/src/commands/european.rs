//! European command implementation
//!
//! Closed-form Black-Scholes price of the configured contract.

use std::io::Write;

use clap::Args;
use pricer_models::analytical::price_european;
use tracing::info;

use super::output::{write_prices, PriceRow};
use super::ContractArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Arguments of the `european` command
#[derive(Debug, Clone, Default, Args)]
pub struct EuropeanArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run the european command
pub fn run<W: Write>(args: &EuropeanArgs, mut config: PricerConfig, out: &mut W) -> Result<()> {
    args.contract.apply(&mut config.contract)?;
    let contract = config.option_contract()?;

    info!(
        spot = contract.spot(),
        strike = contract.strike(),
        maturity = contract.maturity(),
        kind = %contract.kind(),
        "Pricing with Black-Scholes"
    );

    let price = price_european(&contract);
    let row = PriceRow::new(format!("Black-Scholes {}", contract.kind()), price);
    write_prices(&[row], args.format.unwrap_or(config.output_format), out)
}
