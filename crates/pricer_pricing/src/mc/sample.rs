//! Payoff samples and their summary statistics.

/// Undiscounted terminal payoffs, one per simulated path.
///
/// Every element is non-negative. The order is the path order of the run
/// that produced it and is read-only to consumers.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PayoffSample;
///
/// let sample = PayoffSample::from(vec![0.0, 2.0, 4.0]);
/// assert_eq!(sample.len(), 3);
/// assert_eq!(sample.mean(), 2.0);
/// assert_eq!(sample.variance(), 4.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PayoffSample {
    values: Vec<f64>,
}

impl PayoffSample {
    /// Number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the sample has no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Payoffs in path order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over payoffs in path order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consumes the sample, returning the payoff vector.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Arithmetic mean, 0 for an empty sample.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Unbiased sample variance, 0 with fewer than two paths.
    pub fn variance(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let sum_sq: f64 = self.values.iter().map(|v| (v - mean) * (v - mean)).sum();
        sum_sq / (n - 1) as f64
    }

    /// Sample standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean, σ̂/√n.
    pub fn std_error(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.std_dev() / (self.values.len() as f64).sqrt()
    }

    /// Present value estimate: mean and standard error scaled by e^(-rT).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::PayoffSample;
    ///
    /// let sample = PayoffSample::from(vec![10.0, 10.0]);
    /// let result = sample.discounted(0.0, 1.0);
    /// assert_eq!(result.price, 10.0);
    /// assert_eq!(result.std_error, 0.0);
    /// ```
    pub fn discounted(&self, rate: f64, maturity: f64) -> PricingResult {
        let discount = (-rate * maturity).exp();
        PricingResult {
            price: discount * self.mean(),
            std_error: discount * self.std_error(),
        }
    }
}

impl From<Vec<f64>> for PayoffSample {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl AsRef<[f64]> for PayoffSample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a PayoffSample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }

    /// Number of standard errors between this estimate and `target`.
    #[inline]
    pub fn z_score(&self, target: f64) -> f64 {
        (self.price - target) / self.std_error
    }
}
