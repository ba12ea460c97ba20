//! Monte Carlo payoff simulation.
//!
//! This module provides the terminal-value simulator for vanilla options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationConfig  (paths, batch size, seed, parallel flag)
//! ├── PricerRng         (one generator per batch)
//! └── Orchestration
//!     ├── fill_normal()       per batch
//!     ├── payoff mapping      in place
//!     └── PayoffSample        discounted into PricingResult
//! ```
//!
//! [`simulate_payoffs`] is the single-stream form: it draws every path from
//! one caller-owned generator.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::OptionContract;
//! use pricer_pricing::mc::{MonteCarloSimulator, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let put = OptionContract::put(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let result = MonteCarloSimulator::new(config).price(&put).unwrap();
//!
//! println!("Price: {:.4} ± {:.4}", result.price, result.confidence_95());
//! ```

mod config;
mod error;
mod sample;
mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_BATCH_SIZE, MAX_PATHS};
pub use error::ConfigError;
pub use sample::{PayoffSample, PricingResult};
pub use simulator::{simulate_payoffs, MonteCarloSimulator};
