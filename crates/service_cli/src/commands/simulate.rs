//! Simulate command implementation
//!
//! Monte Carlo price estimate, optionally saving the payoff sample as CSV.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use pricer_pricing::mc::{MonteCarloSimulator, PayoffSample};
use tracing::info;

use super::output::{write_prices, PriceRow};
use super::{ContractArgs, SimulationArgs};
use crate::config::{ConfigError, OutputFormat, PricerConfig};
use crate::Result;

/// Arguments of the `simulate` command
#[derive(Debug, Clone, Default, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Write the undiscounted payoff sample to this CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Apply contract and simulation flags, then draw the payoff sample
pub fn simulate_sample(
    contract_args: &ContractArgs,
    simulation_args: &SimulationArgs,
    config: &mut PricerConfig,
) -> Result<PayoffSample> {
    contract_args.apply(&mut config.contract)?;
    simulation_args.apply(&mut config.simulation);

    let contract = config.option_contract()?;
    let simulation = config.simulation_config().map_err(ConfigError::from)?;

    info!(
        paths = simulation.n_paths(),
        batch_size = simulation.batch_size(),
        seed = ?simulation.seed(),
        parallel = simulation.parallel(),
        "Simulating payoffs"
    );

    let sample = MonteCarloSimulator::new(simulation).simulate(&contract)?;
    Ok(sample)
}

/// Write one `path,payoff` record per path
pub fn write_sample_csv(sample: &PayoffSample, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["path", "payoff"])?;
    for (index, payoff) in sample.iter().enumerate() {
        writer.write_record([index.to_string(), payoff.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the simulate command
pub fn run<W: Write>(args: &SimulateArgs, mut config: PricerConfig, out: &mut W) -> Result<()> {
    let sample = simulate_sample(&args.contract, &args.simulation, &mut config)?;
    let contract = config.option_contract()?;

    if let Some(path) = &args.output {
        write_sample_csv(&sample, path)?;
        info!(path = %path.display(), paths = sample.len(), "Payoff sample written");
    }

    let result = sample.discounted(contract.rate(), contract.maturity());
    let row = PriceRow::new(
        format!("Monte Carlo {} ({} paths)", contract.kind(), sample.len()),
        result.price,
    )
    .with_std_error(result.std_error);

    write_prices(&[row], args.format.unwrap_or(config.output_format), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use pricer_pricing::mc::ConfigError as SimulationConfigError;

    fn seeded(paths: usize) -> SimulateArgs {
        SimulateArgs {
            simulation: SimulationArgs {
                paths: Some(paths),
                seed: Some(42),
                ..Default::default()
            },
            format: Some(OutputFormat::Json),
            ..Default::default()
        }
    }

    #[test]
    fn test_price_within_three_std_errors() {
        let mut buffer = Vec::new();
        run(&seeded(10_000), PricerConfig::default(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        let price = value[0]["price"].as_f64().unwrap();
        let std_error = value[0]["std_error"].as_f64().unwrap();
        assert!((price - 10.4506).abs() < 3.0 * std_error);
    }

    #[test]
    fn test_sequential_flag_gives_same_output() {
        let mut parallel = Vec::new();
        run(&seeded(9000), PricerConfig::default(), &mut parallel).unwrap();

        let mut args = seeded(9000);
        args.simulation.sequential = true;
        let mut sequential = Vec::new();
        run(&args, PricerConfig::default(), &mut sequential).unwrap();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_writes_payoff_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payoffs.csv");
        let mut args = seeded(250);
        args.output = Some(path.clone());

        let mut buffer = Vec::new();
        run(&args, PricerConfig::default(), &mut buffer).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let payoffs: Vec<f64> = reader
            .records()
            .map(|r| r.unwrap()[1].parse().unwrap())
            .collect();
        assert_eq!(payoffs.len(), 250);
        assert!(payoffs.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn test_zero_paths_rejected() {
        let mut buffer = Vec::new();
        let err = run(&seeded(0), PricerConfig::default(), &mut buffer).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::Simulation(SimulationConfigError::InvalidPathCount(0)))
        ));
    }

    #[test]
    fn test_zero_batch_size_names_batch_size() {
        let mut args = seeded(10_000);
        args.simulation.batch_size = Some(0);

        let mut buffer = Vec::new();
        let err = run(&args, PricerConfig::default(), &mut buffer).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::Simulation(SimulationConfigError::InvalidBatchSize(0)))
        ));
        assert!(err.to_string().contains("Invalid batch size 0"), "{}", err);
        assert!(buffer.is_empty());
    }
}
