//! Normal QQ plot data.
//!
//! The i-th smallest observation (1-based) is paired with the standard normal
//! quantile Φ⁻¹(i / (n + 1)). The reference line is the standardised line
//! y = mean + std·x, with the population standard deviation.

use pricer_core::math::norm_inv_cdf;
use pricer_core::types::PricingError;

/// Minimum sample length for a QQ plot.
pub const MIN_SAMPLE_LEN: usize = 2;

/// One point of a QQ plot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QqPoint {
    /// Standard normal quantile.
    pub theoretical: f64,
    /// Order statistic of the sample.
    pub sample: f64,
}

/// QQ plot of a sample against the standard normal distribution.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::diagnostics::QqPlot;
///
/// let plot = QqPlot::from_sample(&[3.0, 1.0, 2.0]).unwrap();
///
/// let sorted: Vec<f64> = plot.points().iter().map(|p| p.sample).collect();
/// assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
///
/// // Middle plotting position 2/4 sits at the median
/// assert!(plot.points()[1].theoretical.abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QqPlot {
    points: Vec<QqPoint>,
    mean: f64,
    std_dev: f64,
}

impl QqPlot {
    /// Builds the plot from a sample in any order.
    ///
    /// # Errors
    /// `PricingError::InsufficientSample` with fewer than two observations.
    pub fn from_sample(sample: &[f64]) -> Result<Self, PricingError> {
        let n = sample.len();
        if n < MIN_SAMPLE_LEN {
            return Err(PricingError::InsufficientSample {
                len: n,
                required: MIN_SAMPLE_LEN,
            });
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        let denominator = (n + 1) as f64;
        let points = sorted
            .into_iter()
            .enumerate()
            .map(|(i, value)| QqPoint {
                theoretical: norm_inv_cdf((i + 1) as f64 / denominator),
                sample: value,
            })
            .collect();

        let mean = sample.iter().sum::<f64>() / n as f64;
        let variance = sample.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;

        Ok(Self {
            points,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Points in increasing order of both coordinates.
    #[inline]
    pub fn points(&self) -> &[QqPoint] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a plot has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Standardised reference line as `(intercept, slope)`.
    ///
    /// Intercept is the sample mean and slope the population standard
    /// deviation. A normal sample lies close to this line.
    #[inline]
    pub fn reference_line(&self) -> (f64, f64) {
        (self.mean, self.std_dev)
    }

    /// Value of the reference line at a theoretical quantile.
    #[inline]
    pub fn reference_value(&self, theoretical: f64) -> f64 {
        self.mean + self.std_dev * theoretical
    }

    /// Probability-plot correlation coefficient.
    ///
    /// Pearson correlation between theoretical and sample quantiles; 1 for a
    /// perfectly normal sample, 0 when the sample is constant.
    pub fn correlation(&self) -> f64 {
        let n = self.points.len() as f64;
        let mean_x = self.points.iter().map(|p| p.theoretical).sum::<f64>() / n;
        let mean_y = self.mean;

        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for p in &self.points {
            let dx = p.theoretical - mean_x;
            let dy = p.sample - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if sxx == 0.0 || syy == 0.0 {
            return 0.0;
        }
        sxy / (sxx * syy).sqrt()
    }
}
