//! Numerical primitives.
//!
//! - [`distributions`]: Standard normal CDF, PDF and quantile function

pub mod distributions;

pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
