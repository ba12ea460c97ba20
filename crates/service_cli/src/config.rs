//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by each command)
//! 2. Environment variables (`PRICER_*`)
//! 3. Config file
//! 4. Default values
//!
//! Loading only rejects values that fail to parse (unknown kind, unknown log
//! level, malformed numbers). Range checks run when a command builds its
//! pricers, after its flags have been applied.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use pricer_core::types::{OptionContract, OptionKind, PricingError};
use pricer_models::lattice::{BinomialLattice, ExerciseStyle};
use pricer_pricing::mc::{ConfigError as SimulationConfigError, SimulationConfig, DEFAULT_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "pricer.toml";

/// Environment variable names
pub mod env_keys {
    /// Log level
    pub const LOG_LEVEL: &str = "PRICER_LOG_LEVEL";
    /// Price output format
    pub const OUTPUT_FORMAT: &str = "PRICER_OUTPUT_FORMAT";
    /// Lattice steps
    pub const LATTICE_STEPS: &str = "PRICER_LATTICE_STEPS";
    /// Monte Carlo path count
    pub const MC_PATHS: &str = "PRICER_MC_PATHS";
    /// Monte Carlo base seed
    pub const MC_SEED: &str = "PRICER_MC_SEED";
    /// Monte Carlo batch size
    pub const MC_BATCH_SIZE: &str = "PRICER_MC_BATCH_SIZE";
    /// Monte Carlo parallel flag
    pub const MC_PARALLEL: &str = "PRICER_MC_PARALLEL";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid pricing settings: {0}")]
    Pricing(#[from] PricingError),

    #[error("Invalid simulation settings: {0}")]
    Simulation(#[from] SimulationConfigError),

    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output format for prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "output_format",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// `[contract]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractSettings {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub kind: OptionKind,
}

impl Default for ContractSettings {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            kind: OptionKind::Call,
        }
    }
}

/// `[lattice]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatticeSettings {
    pub steps: usize,
    pub american: bool,
}

impl Default for LatticeSettings {
    fn default() -> Self {
        Self {
            steps: 500,
            american: false,
        }
    }
}

/// `[simulation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    pub paths: usize,
    pub batch_size: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            paths: 10_000,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            parallel: true,
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    pub output_format: OutputFormat,
    pub contract: ContractSettings,
    pub lattice: LatticeSettings,
    pub simulation: SimulationSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl PricerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: PricerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        Ok(config)
    }

    /// Override fields from environment variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(env_keys::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(env_keys::OUTPUT_FORMAT) {
            self.output_format = <OutputFormat as FromStr>::from_str(&format)?;
        }
        if let Some(steps) = lookup(env_keys::LATTICE_STEPS) {
            self.lattice.steps = parse_env(env_keys::LATTICE_STEPS, &steps)?;
        }
        if let Some(paths) = lookup(env_keys::MC_PATHS) {
            self.simulation.paths = parse_env(env_keys::MC_PATHS, &paths)?;
        }
        if let Some(seed) = lookup(env_keys::MC_SEED) {
            self.simulation.seed = Some(parse_env(env_keys::MC_SEED, &seed)?);
        }
        if let Some(batch) = lookup(env_keys::MC_BATCH_SIZE) {
            self.simulation.batch_size = parse_env(env_keys::MC_BATCH_SIZE, &batch)?;
        }
        if let Some(parallel) = lookup(env_keys::MC_PARALLEL) {
            self.simulation.parallel = parse_env(env_keys::MC_PARALLEL, &parallel)?;
        }
        Ok(())
    }

    /// Validate every section by building the objects it describes
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.option_contract()?;
        self.lattice()?;
        self.simulation_config()?;
        Ok(())
    }

    /// Validated contract from the `[contract]` section
    pub fn option_contract(&self) -> Result<OptionContract<f64>, PricingError> {
        let c = &self.contract;
        OptionContract::new(c.spot, c.strike, c.maturity, c.rate, c.volatility, c.kind)
    }

    /// Lattice pricer from the `[lattice]` section
    pub fn lattice(&self) -> Result<BinomialLattice, PricingError> {
        let exercise = if self.lattice.american {
            ExerciseStyle::American
        } else {
            ExerciseStyle::European
        };
        Ok(BinomialLattice::new(self.lattice.steps)?.with_exercise(exercise))
    }

    /// Simulator configuration from the `[simulation]` section
    pub fn simulation_config(&self) -> Result<SimulationConfig, SimulationConfigError> {
        let s = &self.simulation;
        SimulationConfig::builder()
            .n_paths(s.paths)
            .batch_size(s.batch_size)
            .maybe_seed(s.seed)
            .parallel(s.parallel)
            .build()
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::FileError(format!("Failed to serialise TOML: {}", e)))
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Build configuration from file, process environment and defaults
///
/// An explicitly named file must exist. Without one, [`DEFAULT_CONFIG_FILE`]
/// is read if present.
pub fn build_config(config_file: Option<&Path>) -> Result<PricerConfig, ConfigError> {
    build_config_with_env(config_file, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment
pub fn build_config_with_env<F>(
    config_file: Option<&Path>,
    lookup: F,
) -> Result<PricerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_file {
        Some(path) => PricerConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                PricerConfig::from_file(default_path)?
            } else {
                PricerConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;

    Ok(config)
}
