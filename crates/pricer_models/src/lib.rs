//! # Pricer Models (L2: Business Logic)
//!
//! Deterministic pricers for vanilla options.
//!
//! This crate provides:
//! - Closed-form Black-Scholes valuation of European calls and puts
//! - Cox-Ross-Rubinstein binomial lattice with optional early exercise
//!
//! Both are generic over `T: num_traits::Float` and consume the validated
//! [`pricer_core::types::OptionContract`].
//!
//! ## Design Principles
//!
//! - **Validate once**: contracts are checked at construction, so the
//!   closed form is infallible
//! - **Bit-identical reruns**: no pricer here draws randomness

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
