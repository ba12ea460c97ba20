//! Compare command implementation
//!
//! Prices the configured contract with all three pricers and reports each
//! against the closed-form value.

use std::io::Write;

use clap::Args;
use pricer_models::analytical::price_european;
use pricer_pricing::mc::MonteCarloSimulator;
use tracing::{info, warn};

use super::output::{write_prices, PriceRow};
use super::{ContractArgs, SimulationArgs};
use crate::config::{ConfigError, OutputFormat, PricerConfig};
use crate::Result;

/// Simulated prices further than this many standard errors from the closed
/// form are flagged in the log.
const Z_SCORE_WARNING: f64 = 3.0;

/// Arguments of the `compare` command
#[derive(Debug, Clone, Default, Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Number of lattice time steps
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run the compare command
pub fn run<W: Write>(args: &CompareArgs, mut config: PricerConfig, out: &mut W) -> Result<()> {
    args.contract.apply(&mut config.contract)?;
    args.simulation.apply(&mut config.simulation);
    if let Some(steps) = args.steps {
        config.lattice.steps = steps;
    }

    let contract = config.option_contract()?;
    let lattice = config.lattice()?;
    let simulation = config.simulation_config().map_err(ConfigError::from)?;
    let n_paths = simulation.n_paths();

    info!(
        kind = %contract.kind(),
        steps = lattice.steps(),
        paths = n_paths,
        "Comparing pricers"
    );

    let analytic = price_european(&contract);
    let lattice_price = lattice.price(&contract)?;
    let mc = MonteCarloSimulator::new(simulation).price(&contract)?;

    let z = mc.z_score(analytic);
    if z.abs() > Z_SCORE_WARNING {
        warn!(z_score = z, "Monte Carlo estimate far from closed form");
    }

    let rows = [
        PriceRow::new(format!("Black-Scholes {}", contract.kind()), analytic),
        PriceRow::new(
            format!("Binomial {} ({} steps)", lattice.exercise(), lattice.steps()),
            lattice_price,
        )
        .against(analytic),
        PriceRow::new(format!("Monte Carlo ({} paths)", n_paths), mc.price)
            .with_std_error(mc.std_error)
            .against(analytic),
    ];

    write_prices(&rows, args.format.unwrap_or(config.output_format), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_all_pricers_agree() {
        let args = CompareArgs {
            simulation: SimulationArgs {
                seed: Some(42),
                ..Default::default()
            },
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run(&args, PricerConfig::default(), &mut buffer).unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 3);

        let analytic = rows[0]["price"].as_f64().unwrap();
        assert!((analytic - 10.4506).abs() < 1e-3);

        let lattice_gap = rows[1]["vs_analytic"].as_f64().unwrap();
        assert!(lattice_gap.abs() < 0.01);

        let mc_gap = rows[2]["vs_analytic"].as_f64().unwrap();
        let std_error = rows[2]["std_error"].as_f64().unwrap();
        assert!(mc_gap.abs() < 3.0 * std_error);
    }

    #[test]
    fn test_table_has_three_rows() {
        let args = CompareArgs {
            steps: Some(100),
            simulation: SimulationArgs {
                paths: Some(2000),
                seed: Some(3),
                ..Default::default()
            },
            format: Some(OutputFormat::Table),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run(&args, PricerConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Binomial european (100 steps)"));
        assert!(text.contains("Monte Carlo (2000 paths)"));
    }
}
