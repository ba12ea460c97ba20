//! Cox-Ross-Rubinstein binomial lattice.
//!
//! ## Parameterisation
//!
//! - Δt = T / N
//! - u = e^(σ√Δt), d = 1/u
//! - p = (e^(rΔt) - d) / (u - d), not clamped to [0, 1]
//!
//! Node (i, j) sits at time step i after j down moves, with underlying price
//! S·u^(i-2j), capped at √(T::MAX). Backward induction:
//!
//! V(i, j) = e^(-rΔt)·(p·V(i+1, j) + (1-p)·V(i+1, j+1))
//!
//! ## Storage
//!
//! Only layer i+1 is read while layer i is written, and V(i, j) depends on
//! slots j and j+1 of the next layer. A single buffer of N+1 nodes updated in
//! ascending j therefore never reads an overwritten slot: O(N) memory, O(N²) work.

use num_traits::Float;
use pricer_core::types::{CancellationToken, OptionContract, PricingError};

use super::exercise::ExerciseStyle;

/// Per-step lattice factors derived from a contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeFactors<T: Float> {
    /// Step length Δt in years.
    pub dt: T,
    /// Up factor u.
    pub up: T,
    /// Down factor d = 1/u.
    pub down: T,
    /// Risk-neutral up probability p.
    pub probability: T,
    /// One-step discount factor e^(-rΔt).
    pub discount: T,
}

/// Binomial lattice pricer.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionContract;
/// use pricer_models::lattice::{BinomialLattice, ExerciseStyle};
///
/// let put = OptionContract::put(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let european = BinomialLattice::new(200).unwrap().price(&put).unwrap();
/// let american = BinomialLattice::new(200)
///     .unwrap()
///     .with_exercise(ExerciseStyle::American)
///     .price(&put)
///     .unwrap();
///
/// // Early exercise has value for a put
/// assert!(american > european);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialLattice {
    steps: usize,
    exercise: ExerciseStyle,
}

impl BinomialLattice {
    /// Creates a European-rollback lattice with the given number of steps.
    ///
    /// # Errors
    /// `PricingError::InvalidSteps` if `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::InvalidSteps(steps));
        }
        Ok(Self {
            steps,
            exercise: ExerciseStyle::European,
        })
    }

    /// Sets the exercise style.
    #[inline]
    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise(&self) -> ExerciseStyle {
        self.exercise
    }

    /// Computes the CRR factors for a contract.
    ///
    /// # Errors
    /// `PricingError::DegenerateLattice` if σ√Δt is too small to separate
    /// u from d, or the resulting probability is not finite.
    pub fn factors<T: Float>(
        &self,
        contract: &OptionContract<T>,
    ) -> Result<LatticeFactors<T>, PricingError> {
        let n = T::from(self.steps).ok_or(PricingError::InvalidSteps(self.steps))?;
        let dt = contract.maturity() / n;
        let up = (contract.volatility() * dt.sqrt()).exp();
        let down = T::one() / up;

        let spread = up - down;
        if !(spread > T::zero()) {
            return Err(degenerate(up, down));
        }

        let probability = ((contract.rate() * dt).exp() - down) / spread;
        if !probability.is_finite() {
            return Err(degenerate(up, down));
        }

        Ok(LatticeFactors {
            dt,
            up,
            down,
            probability,
            discount: (-contract.rate() * dt).exp(),
        })
    }

    /// Prices the contract by backward induction.
    ///
    /// Deterministic: identical inputs give bit-identical results. The price
    /// is non-negative whenever 0 ≤ p ≤ 1; with p > 1 (e^(rΔt) > u) a put can
    /// come out negative.
    ///
    /// # Errors
    /// `PricingError::DegenerateLattice` (see [`BinomialLattice::factors`]).
    pub fn price<T: Float>(&self, contract: &OptionContract<T>) -> Result<T, PricingError> {
        self.rollback(contract, None)
    }

    /// Like [`BinomialLattice::price`], checking `token` before each time layer.
    ///
    /// # Errors
    /// `PricingError::Cancelled` once the token fires, reporting the number
    /// of completed layers out of `steps`.
    pub fn price_cancellable<T: Float>(
        &self,
        contract: &OptionContract<T>,
        token: &CancellationToken,
    ) -> Result<T, PricingError> {
        self.rollback(contract, Some(token))
    }

    fn rollback<T: Float>(
        &self,
        contract: &OptionContract<T>,
        token: Option<&CancellationToken>,
    ) -> Result<T, PricingError> {
        let f = self.factors(contract)?;
        let steps = self.steps;
        let spot = contract.spot();
        let p = f.probability;
        let q = T::one() - p;

        // Terminal layer: j down moves, steps - j up moves.
        let mut values: Vec<T> = (0..=steps)
            .map(|j| contract.payoff(node_spot(spot, f.up, steps - j, j)))
            .collect();

        let american = self.exercise.is_american();

        for i in (0..steps).rev() {
            if let Some(token) = token {
                token.check(steps - 1 - i, steps)?;
            }

            if american {
                for j in 0..=i {
                    let continuation = f.discount * (p * values[j] + q * values[j + 1]);
                    let exercise = contract.payoff(node_spot(spot, f.up, i - j, j));
                    values[j] = continuation.max(exercise);
                }
            } else {
                for j in 0..=i {
                    values[j] = f.discount * (p * values[j] + q * values[j + 1]);
                }
            }
        }

        Ok(values[0])
    }
}

/// Lattice price with the given number of steps.
///
/// The rollback takes no early-exercise decision. Use
/// [`BinomialLattice::with_exercise`] with [`ExerciseStyle::American`] for
/// true American valuation. As with [`BinomialLattice::price`], the result is
/// non-negative only while 0 ≤ p ≤ 1.
///
/// # Errors
/// - `PricingError::InvalidSteps` if `steps == 0`
/// - `PricingError::DegenerateLattice` if u and d coincide
///
/// # Examples
/// ```
/// use pricer_core::types::OptionContract;
/// use pricer_models::lattice::price_american_lattice;
///
/// let call = OptionContract::call(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let price = price_american_lattice(&call, 500).unwrap();
/// assert!((price - 10.45).abs() < 0.01);
///
/// assert!(price_american_lattice(&call, 0).is_err());
/// ```
pub fn price_american_lattice<T: Float>(
    contract: &OptionContract<T>,
    steps: usize,
) -> Result<T, PricingError> {
    BinomialLattice::new(steps)?.price(contract)
}

/// Underlying price after `ups` up moves and `downs` down moves.
///
/// Uses the net exponent so u^N cannot overflow while S·u^(N-2j) is finite.
/// Spots above √(T::MAX) are capped: their risk-neutral weight is far below
/// the precision of T, and the cap keeps p·V + (1-p)·V' finite.
#[inline]
fn node_spot<T: Float>(spot: T, up: T, ups: usize, downs: usize) -> T {
    // The O(N²) rollback keeps step counts far below i32::MAX.
    let exponent = ups as i32 - downs as i32;
    (spot * up.powi(exponent)).min(T::max_value().sqrt())
}

fn degenerate<T: Float>(up: T, down: T) -> PricingError {
    PricingError::DegenerateLattice {
        up: up.to_f64().unwrap_or(f64::NAN),
        down: down.to_f64().unwrap_or(f64::NAN),
    }
}
