//! Distributional diagnostics for simulated payoff samples.
//!
//! - `qq`: quantile-quantile comparison against the standard normal

pub mod qq;

pub use qq::{QqPlot, QqPoint};
