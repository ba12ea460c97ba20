//! Exercise style for lattice valuation.

use std::fmt;

/// When the holder may exercise.
///
/// # Variants
/// - `European`: Exercise only at expiry; the rollback is pure discounted expectation
/// - `American`: Exercise at any node; each node takes max(continuation, intrinsic)
///
/// # Examples
/// ```
/// use pricer_models::lattice::ExerciseStyle;
///
/// assert!(ExerciseStyle::default().is_european());
/// assert!(ExerciseStyle::American.is_american());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    #[default]
    European,
    /// Exercise at any time up to expiry.
    American,
}

impl ExerciseStyle {
    /// Returns whether this is European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns whether this is American exercise.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => f.write_str("european"),
            ExerciseStyle::American => f.write_str("american"),
        }
    }
}
