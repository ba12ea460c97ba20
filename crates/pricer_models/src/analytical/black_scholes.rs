//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use num_traits::Float;
use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::{OptionContract, OptionKind, PricingError};

/// Black-Scholes model for European option pricing.
///
/// Holds the market side of the inputs (spot, rate, volatility); strike and
/// expiry are supplied per pricing call.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// `PricingError::InvalidContract` if spot or volatility is not positive,
    /// or rate is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        // Reuse contract validation with a placeholder strike and expiry.
        let one = T::one();
        OptionContract::new(spot, one, one, rate, volatility, OptionKind::Call)?;
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Model carrying the market inputs of a validated contract.
    #[inline]
    pub fn from_contract(contract: &OptionContract<T>) -> Self {
        Self {
            spot: contract.spot(),
            rate: contract.rate(),
            volatility: contract.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Expects `expiry > 0`.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price: C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        let price = self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2);
        price.max(T::zero())
    }

    /// European put price: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        let price = strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1);
        price.max(T::zero())
    }

    /// Prices the contract's kind at its strike and maturity.
    ///
    /// Uses this model's market inputs, not the contract's.
    #[inline]
    pub fn price(&self, contract: &OptionContract<T>) -> T {
        match contract.kind() {
            OptionKind::Call => self.price_call(contract.strike(), contract.maturity()),
            OptionKind::Put => self.price_put(contract.strike(), contract.maturity()),
        }
    }
}

/// Closed-form European price of a validated contract.
///
/// Pure and deterministic: identical inputs give bit-identical results.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionContract;
/// use pricer_models::analytical::price_european;
///
/// let call = OptionContract::call(100.0_f64, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let price = price_european(&call);
/// assert!((price - 10.45).abs() < 0.01);
/// ```
#[inline]
pub fn price_european<T: Float>(contract: &OptionContract<T>) -> T {
    BlackScholes::from_contract(contract).price(contract)
}
