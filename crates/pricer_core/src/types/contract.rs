//! Option contract definitions.
//!
//! This module provides the contract description shared by every pricer:
//! - `OptionKind`: Closed two-variant enumeration (call or put)
//! - `OptionContract`: Validated, immutable contract and model inputs

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Kind of vanilla option.
///
/// There is no third variant: text that names neither kind is rejected at
/// parse time with [`PricingError::InvalidOptionKind`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let call: OptionKind = "call".parse().unwrap();
/// assert_eq!(call, OptionKind::Call);
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Intrinsic value at the given underlying price.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionKind::Call => (spot - strike).max(zero),
            OptionKind::Put => (strike - spot).max(zero),
        }
    }

    /// Returns the other kind.
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionKind::Call => OptionKind::Put,
            OptionKind::Put => OptionKind::Call,
        }
    }

    /// Lowercase name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionKind> for String {
    fn from(kind: OptionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Vanilla option contract together with its flat model inputs.
///
/// Immutable once constructed. `spot`, `strike`, `maturity` and `volatility`
/// are strictly positive and finite; `rate` is finite with any sign.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(contract.spot(), 100.0);
/// assert!((contract.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// // Zero volatility is rejected
/// assert!(OptionContract::new(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionKind::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract<T: Float> {
    spot: T,
    strike: T,
    maturity: T,
    rate: T,
    volatility: T,
    kind: OptionKind,
}

impl<T: Float> OptionContract<T> {
    /// Creates a validated contract.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `maturity` - Time to expiry in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (any sign)
    /// * `volatility` - Annualised volatility (must be positive)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// `PricingError::InvalidContract` naming the first offending field.
    pub fn new(
        spot: T,
        strike: T,
        maturity: T,
        rate: T,
        volatility: T,
        kind: OptionKind,
    ) -> Result<Self, PricingError> {
        ensure_positive("spot", spot)?;
        ensure_positive("strike", strike)?;
        ensure_positive("maturity", maturity)?;
        ensure_positive("volatility", volatility)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidContract {
                field: "rate",
                value: to_f64(rate),
            });
        }

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        })
    }

    /// Creates a validated call contract.
    pub fn call(spot: T, strike: T, maturity: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        Self::new(spot, strike, maturity, rate, volatility, OptionKind::Call)
    }

    /// Creates a validated put contract.
    pub fn put(spot: T, strike: T, maturity: T, rate: T, volatility: T) -> Result<Self, PricingError> {
        Self::new(spot, strike, maturity, rate, volatility, OptionKind::Put)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
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

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Discount factor to expiry: e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.maturity).exp()
    }

    /// Forward price of the underlying: S·e^(rT).
    #[inline]
    pub fn forward(&self) -> T {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// Intrinsic value at the given underlying price.
    #[inline]
    pub fn payoff(&self, underlying: T) -> T {
        self.kind.intrinsic(underlying, self.strike)
    }

    /// Copy of this contract with another kind; all other inputs unchanged.
    #[inline]
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }
}

fn ensure_positive<T: Float>(field: &'static str, value: T) -> Result<(), PricingError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(PricingError::InvalidContract {
            field,
            value: to_f64(value),
        })
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
