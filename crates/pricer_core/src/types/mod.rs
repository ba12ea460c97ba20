//! Contract, error and control types shared by every pricer.
//!
//! This module provides:
//! - `contract`: `OptionKind` and the validated `OptionContract`
//! - `error`: The `PricingError` taxonomy
//! - `cancel`: `CancellationToken` for cooperative cancellation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionContract`], [`OptionKind`] from `contract`
//! - [`PricingError`] from `error`
//! - [`CancellationToken`] from `cancel`

pub mod cancel;
pub mod contract;
pub mod error;

// Re-export commonly used types at module level
pub use cancel::CancellationToken;
pub use contract::{OptionContract, OptionKind};
pub use error::PricingError;
