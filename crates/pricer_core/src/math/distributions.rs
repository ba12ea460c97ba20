//! Standard normal distribution primitives.
//!
//! - `norm_cdf`: Φ(x), used by the closed-form pricer
//! - `norm_pdf`: φ(x)
//! - `norm_inv_cdf`: Φ⁻¹(p), used for theoretical quantiles in payoff diagnostics
//!
//! `norm_cdf` and `norm_pdf` are generic over `T: Float`.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients, lowest order first.
const ERFC_COEFFS: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Abramowitz and Stegun 7.1.26 scale constant.
const ERFC_P: f64 = 0.327_591_1;

/// Complementary error function, maximum absolute error 1.5e-7.
///
/// Evaluated on |x| and reflected with erfc(-x) = 2 - erfc(x), so
/// erfc(x) + erfc(-x) = 2 holds up to rounding.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();
    let t = one / (one + constant::<T>(ERFC_P) * abs_x);

    let poly = ERFC_COEFFS
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * t + constant::<T>(c));
    let tail = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        constant::<T>(2.0) - tail
    } else {
        tail
    }
}

#[inline]
fn constant<T: Float>(value: f64) -> T {
    // Every Float implementation can represent an f64 literal (possibly rounded).
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(-x/√2). Symmetric to rounding: Φ(x) + Φ(-x) = 1.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    constant::<T>(0.5) * erfc(-x / constant::<T>(std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (constant::<T>(-0.5) * x * x).exp()
}

// Acklam's rational approximation coefficients.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Lower breakpoint between the tail and central regions.
const P_LOW: f64 = 0.02425;

/// Inverse of the standard normal CDF (quantile function).
///
/// Acklam's rational approximation, relative error below 1.2e-9.
///
/// # Returns
/// - NaN for `p` outside [0, 1] or NaN
/// - -∞ at 0 and +∞ at 1
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_inv_cdf;
///
/// assert!(norm_inv_cdf(0.5).abs() < 1e-9);
/// assert!((norm_inv_cdf(0.975) - 1.959964).abs() < 1e-5);
/// assert!(norm_inv_cdf(1.5).is_nan());
/// ```
pub fn norm_inv_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        let num = horner(&ACKLAM_A, r);
        let den = horner(&ACKLAM_B, r) * r + 1.0;
        num * q / den
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    }
}

#[inline]
fn tail_ratio(q: f64) -> f64 {
    horner(&ACKLAM_C, q) / (horner(&ACKLAM_D, q) * q + 1.0)
}

/// Evaluates a polynomial with coefficients given highest order first.
#[inline]
fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_exact_symmetry() {
        for i in -40..=40 {
            let x = i as f64 * 0.25;
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_extremes_stay_in_unit_interval() {
        for x in [-40.0_f64, -10.0, -8.0, 8.0, 10.0, 40.0] {
            let v = norm_cdf(x);
            assert!((0.0..=1.0).contains(&v), "Φ({}) = {}", x, v);
        }
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let xs: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for pair in xs.windows(2) {
            assert!(norm_cdf(pair[1]) > norm_cdf(pair[0]), "not monotonic at {}", pair[0]);
        }
    }

    #[test]
    fn test_norm_cdf_f32() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(-2.0_f64), 0.05399096651318806, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_derivative_matches_pdf() {
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let slope = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(slope, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_norm_inv_cdf_known_values() {
        assert_relative_eq!(norm_inv_cdf(0.5), 0.0, epsilon = 1e-12);
        assert_relative_eq!(norm_inv_cdf(0.8413447460685429), 1.0, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.022750131948179195), -2.0, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.001), -3.090232306167813, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.999), 3.090232306167813, epsilon = 1e-8);
    }

    #[test]
    fn test_norm_inv_cdf_edges() {
        assert_eq!(norm_inv_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(norm_inv_cdf(1.0), f64::INFINITY);
        assert!(norm_inv_cdf(-0.1).is_nan());
        assert!(norm_inv_cdf(1.1).is_nan());
        assert!(norm_inv_cdf(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn prop_inv_cdf_inverts_cdf(p in 0.0001_f64..0.9999) {
            let x = norm_inv_cdf(p);
            // Forward CDF carries its own 1.5e-7 approximation error.
            prop_assert!((norm_cdf(x) - p).abs() < 5e-7, "p = {}, x = {}", p, x);
        }

        #[test]
        fn prop_inv_cdf_antisymmetric(p in 0.0001_f64..0.9999) {
            prop_assert!((norm_inv_cdf(p) + norm_inv_cdf(1.0 - p)).abs() < 1e-8);
        }
    }
}
