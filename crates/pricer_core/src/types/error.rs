//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from contract validation and all three pricers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every pricer either fully succeeds or fails atomically with one of these
/// variants, naming the precondition that was violated.
///
/// # Variants
/// - `InvalidContract`: A contract field outside its domain
/// - `InvalidOptionKind`: Text that names neither a call nor a put
/// - `InvalidSteps`: Lattice step count not a positive integer
/// - `InvalidSampleCount`: Simulation path count not a positive integer
/// - `InvalidSimulationConfig`: Path cap or batch size rejected by the engine
/// - `DegenerateLattice`: Up and down factors collapse onto each other
/// - `InsufficientSample`: Too few points for a distributional diagnostic
/// - `Cancelled`: A cancellation token fired mid-computation
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidContract { field: "spot", value: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid contract: spot = -1 (must be positive)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A contract field is non-positive or non-finite.
    #[error("Invalid contract: {field} = {value} (must be positive)")]
    InvalidContract {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Option kind is neither call nor put.
    #[error("Invalid option kind: '{0}' (expected 'call' or 'put')")]
    InvalidOptionKind(String),

    /// Lattice step count is zero.
    #[error("Invalid lattice steps: {0} (must be at least 1)")]
    InvalidSteps(usize),

    /// Simulation path count is zero.
    #[error("Invalid sample count: {0} (must be at least 1)")]
    InvalidSampleCount(usize),

    /// Simulation engine settings other than a zero path count.
    #[error("Invalid simulation config: {0}")]
    InvalidSimulationConfig(String),

    /// Up and down factors are equal, so the risk-neutral probability is undefined.
    #[error("Degenerate lattice: up factor {up} equals down factor {down}")]
    DegenerateLattice {
        /// Up factor u
        up: f64,
        /// Down factor d
        down: f64,
    },

    /// Sample too short for the requested diagnostic.
    #[error("Insufficient sample: {len} points, at least {required} required")]
    InsufficientSample {
        /// Number of points supplied
        len: usize,
        /// Minimum number of points
        required: usize,
    },

    /// Computation stopped at a cancellation point.
    #[error("Cancelled after {completed} of {total} iterations")]
    Cancelled {
        /// Iterations finished before cancellation was observed
        completed: usize,
        /// Total iterations planned
        total: usize,
    },
}

impl PricingError {
    /// Returns whether this error stems from invalid caller input
    /// (as opposed to a numerical or runtime condition).
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidContract { .. }
                | PricingError::InvalidOptionKind(_)
                | PricingError::InvalidSteps(_)
                | PricingError::InvalidSampleCount(_)
                | PricingError::InvalidSimulationConfig(_)
                | PricingError::InsufficientSample { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_contract_display() {
        let err = PricingError::InvalidContract {
            field: "volatility",
            value: 0.0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid contract: volatility = 0 (must be positive)"
        );
    }

    #[test]
    fn test_invalid_option_kind_display() {
        let err = PricingError::InvalidOptionKind("straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid option kind: 'straddle' (expected 'call' or 'put')"
        );
    }

    #[test]
    fn test_invalid_steps_display() {
        let err = PricingError::InvalidSteps(0);
        assert_eq!(
            format!("{}", err),
            "Invalid lattice steps: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_sample_errors_display() {
        assert_eq!(
            PricingError::InvalidSampleCount(0).to_string(),
            "Invalid sample count: 0 (must be at least 1)"
        );
        let err = PricingError::InvalidSimulationConfig("batch size 0".to_string());
        assert_eq!(err.to_string(), "Invalid simulation config: batch size 0");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_degenerate_lattice_display() {
        let err = PricingError::DegenerateLattice { up: 1.0, down: 1.0 };
        assert!(err.to_string().contains("up factor 1 equals down factor 1"));
    }

    #[test]
    fn test_cancelled_display() {
        let err = PricingError::Cancelled {
            completed: 3,
            total: 10,
        };
        assert_eq!(err.to_string(), "Cancelled after 3 of 10 iterations");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(PricingError::InvalidSteps(0).is_input_error());
        assert!(PricingError::InvalidSampleCount(0).is_input_error());
        assert!(PricingError::InvalidOptionKind("x".into()).is_input_error());
        assert!(!PricingError::DegenerateLattice { up: 1.0, down: 1.0 }.is_input_error());
        assert!(!PricingError::Cancelled {
            completed: 0,
            total: 1
        }
        .is_input_error());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidSteps(0);
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidSampleCount(0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
