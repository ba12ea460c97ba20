//! Binomial lattice valuation.
//!
//! This module provides:
//! - `binomial`: Cox-Ross-Rubinstein lattice with O(N) rolling storage
//! - `exercise`: European or American rollback
//!
//! The default rollback is pure discounted expectation. American early
//! exercise is opt-in through [`BinomialLattice::with_exercise`].

pub mod binomial;
pub mod exercise;

pub use binomial::{price_american_lattice, BinomialLattice, LatticeFactors};
pub use exercise::ExerciseStyle;
