//! # Random Number Generation
//!
//! Seeded generators for the payoff simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator can be seeded; the simulator never
//!   touches a process-global RNG
//! - **Efficiency**: zero-allocation batch operations via `&mut [f64]` slices
//! - **Parallel streams**: [`derive_stream_seed`] maps a base seed and a batch
//!   index to an independent seed, so batch output does not depend on which
//!   thread runs it
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{derive_stream_seed, PricerRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // One generator per simulation batch
//! let mut batch_rng = PricerRng::from_seed(derive_stream_seed(12345, 3));
//! let _ = batch_rng.gen_uniform();
//! ```

mod prng;

pub use prng::{derive_stream_seed, PricerRng};

#[cfg(test)]
mod tests;
