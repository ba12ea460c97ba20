//! Lattice command implementation
//!
//! Cox-Ross-Rubinstein binomial price of the configured contract.

use std::io::Write;

use clap::Args;
use tracing::info;

use super::output::{write_prices, PriceRow};
use super::ContractArgs;
use crate::config::{OutputFormat, PricerConfig};
use crate::Result;

/// Arguments of the `lattice` command
#[derive(Debug, Clone, Default, Args)]
pub struct LatticeArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Number of time steps
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Allow early exercise at every node
    #[arg(long)]
    pub american: bool,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl LatticeArgs {
    /// Apply flags to the configuration
    pub fn apply(&self, config: &mut PricerConfig) -> Result<()> {
        self.contract.apply(&mut config.contract)?;
        if let Some(steps) = self.steps {
            config.lattice.steps = steps;
        }
        if self.american {
            config.lattice.american = true;
        }
        Ok(())
    }
}

/// Run the lattice command
pub fn run<W: Write>(args: &LatticeArgs, mut config: PricerConfig, out: &mut W) -> Result<()> {
    args.apply(&mut config)?;
    let contract = config.option_contract()?;
    let lattice = config.lattice()?;

    info!(
        steps = lattice.steps(),
        exercise = %lattice.exercise(),
        kind = %contract.kind(),
        "Pricing with binomial lattice"
    );

    let price = lattice.price(&contract)?;
    let label = format!(
        "Binomial {} {} ({} steps)",
        lattice.exercise(),
        contract.kind(),
        lattice.steps()
    );
    write_prices(
        &[PriceRow::new(label, price)],
        args.format.unwrap_or(config.output_format),
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_core::types::PricingError;

    fn json_price(args: &LatticeArgs) -> f64 {
        let mut buffer = Vec::new();
        run(args, PricerConfig::default(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        value[0]["price"].as_f64().unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let args = LatticeArgs {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        assert!((json_price(&args) - 10.45).abs() < 0.01);
    }

    #[test]
    fn test_american_put_flag() {
        let put = ContractArgs {
            kind: Some("put".to_string()),
            ..Default::default()
        };
        let european = LatticeArgs {
            contract: put.clone(),
            steps: Some(200),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let american = LatticeArgs {
            american: true,
            ..european.clone()
        };
        assert!(json_price(&american) > json_price(&european));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let args = LatticeArgs {
            steps: Some(0),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        let err = run(&args, PricerConfig::default(), &mut buffer).unwrap_err();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidSteps(0))));
    }

    #[test]
    fn test_steps_flag_overrides_zero_configured_steps() {
        let mut config = PricerConfig::default();
        config.lattice.steps = 0;
        let args = LatticeArgs {
            steps: Some(500),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run(&args, config, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!((value[0]["price"].as_f64().unwrap() - 10.45).abs() < 0.01);
    }
}
