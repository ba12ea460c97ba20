//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution for call and
//! put options on a non-dividend-paying underlying.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Works with `f64` and `f32`
//! - **Validated inputs**: Takes an `OptionContract`, so no domain checks are repeated here

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{price_european, BlackScholes};
