//! # pricer_core: Foundation for the Vanilla Option Pricers
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer shared by every pricer, providing:
//! - The validated option contract: `OptionContract`, `OptionKind` (`types::contract`)
//! - The error taxonomy: `PricingError` (`types::error`)
//! - Cooperative cancellation: `CancellationToken` (`types::cancel`)
//! - Standard normal primitives: `norm_cdf`, `norm_pdf`, `norm_inv_cdf` (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionContract, OptionKind, PricingError};
//!
//! let contract = OptionContract::new(100.0_f64, 95.0, 0.5, 0.03, 0.25, OptionKind::Put).unwrap();
//! assert_eq!(contract.payoff(90.0), 5.0);
//!
//! let err = "digital".parse::<OptionKind>().unwrap_err();
//! assert!(matches!(err, PricingError::InvalidOptionKind(_)));
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable (de)serialisation of `OptionKind` as a lowercase string

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
