//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the stochastic side of the workspace:
//! - Seeded random number generation with reproducible per-batch streams
//! - Monte Carlo terminal payoff simulation, sequential or on the rayon pool
//! - QQ diagnostics of simulated payoff samples against the normal
//!
//! The deterministic pricers live in `pricer_models`; both layers share the
//! contract and error types of `pricer_core`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionContract;
//! use pricer_pricing::diagnostics::QqPlot;
//! use pricer_pricing::mc::simulate_payoffs;
//! use pricer_pricing::rng::PricerRng;
//!
//! let call = OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let sample = simulate_payoffs(&call, 10_000, &mut rng).unwrap();
//! let discounted = sample.discounted(call.rate(), call.maturity());
//! assert!((discounted.price - 10.45).abs() < 4.0 * discounted.std_error);
//!
//! // Call payoffs have a point mass at zero, far from normal
//! let qq = QqPlot::from_sample(sample.as_slice()).unwrap();
//! assert!(qq.correlation() < 0.99);
//! ```
//!
//! ## Logging
//!
//! The simulator emits `tracing` debug events at run start and finish. This
//! crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod diagnostics;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use diagnostics::QqPlot;
pub use mc::{simulate_payoffs, MonteCarloSimulator, PayoffSample, PricingResult, SimulationConfig};
pub use rng::PricerRng;
