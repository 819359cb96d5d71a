//! Numeric helpers shared by the test engines
//!
//! - Missing-value detection (`isna`, `filter_na`)
//! - Log binomial coefficient (`lchoose`)
//! - Sample mean and variance

use statrs::function::gamma::ln_gamma;

/// A sample observation that may be missing
///
/// Implemented for plain floats (NaN marks a missing value) and for
/// `Option` wrappers (`None` marks a missing value).
pub trait Observation: Copy {
    /// The observation as `f64`, or `None` if it is missing or NaN
    fn value(self) -> Option<f64>;
}

impl Observation for f64 {
    #[inline]
    fn value(self) -> Option<f64> {
        (!self.is_nan()).then_some(self)
    }
}

impl Observation for f32 {
    #[inline]
    fn value(self) -> Option<f64> {
        f64::from(self).value()
    }
}

impl<T: Observation> Observation for Option<T> {
    #[inline]
    fn value(self) -> Option<f64> {
        self.and_then(Observation::value)
    }
}

/// Indicate whether `x` is missing or NaN
///
/// Infinite values are not missing.
#[inline]
pub fn isna<T: Observation>(x: T) -> bool {
    x.value().is_none()
}

/// Return the log of the number of ways to choose `j` from `n`
///
/// Computed as `ln Γ(n+1) − ln Γ(j+1) − ln Γ(n−j+1)`, so non-integer
/// arguments follow the gamma-function generalization.
///
/// Outside the domain `0 <= j <= n` the binomial coefficient is taken to be
/// zero and `f64::NEG_INFINITY` is returned. NaN arguments yield NaN.
pub fn lchoose(n: f64, j: f64) -> f64 {
    if n.is_nan() || j.is_nan() {
        return f64::NAN;
    }
    if n < 0.0 || j < 0.0 || j > n {
        return f64::NEG_INFINITY;
    }
    if j == 0.0 || j == n {
        return 0.0;
    }
    ln_gamma(n + 1.0) - ln_gamma(j + 1.0) - ln_gamma(n - j + 1.0)
}

/// Collect the non-missing observations of a slice as `f64`
pub fn filter_na<T: Observation>(data: &[T]) -> Vec<f64> {
    data.iter().filter_map(|&x| x.value()).collect()
}

/// Arithmetic mean (NaN for an empty slice)
pub(crate) fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with the `n − 1` denominator (NaN when `n < 2`)
pub(crate) fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isna() {
        assert!(isna(f64::NAN));
        assert!(isna(f32::NAN));
        assert!(isna(None::<f64>));
        assert!(isna(Some(f64::NAN)));

        assert!(!isna(0.0_f64));
        assert!(!isna(-3.5_f64));
        assert!(!isna(Some(2.0_f64)));
        assert!(!isna(f64::INFINITY));
    }

    #[test]
    fn test_filter_na() {
        let data = [Some(1.0), None, Some(f64::NAN), Some(4.0)];
        assert_eq!(filter_na(&data), vec![1.0, 4.0]);

        let data = [1.0_f32, f32::NAN, 3.0];
        assert_eq!(filter_na(&data), vec![1.0, 3.0]);
    }

    #[test]
    fn test_lchoose_known_values() {
        assert_relative_eq!(lchoose(5.0, 2.0), 10.0_f64.ln(), epsilon = 1e-10);
        assert_relative_eq!(lchoose(10.0, 3.0), 120.0_f64.ln(), epsilon = 1e-10);
        assert_relative_eq!(lchoose(50.0, 25.0), 126_410_606_437_752.0_f64.ln(), epsilon = 1e-10);
        // C(4.5, 2) = 4.5 * 3.5 / 2
        assert_relative_eq!(lchoose(4.5, 2.0), 7.875_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn test_lchoose_boundaries() {
        for n in 0..200 {
            let n = f64::from(n);
            assert_eq!(lchoose(n, 0.0), 0.0);
            assert_eq!(lchoose(n, n), 0.0);
        }
    }

    #[test]
    fn test_lchoose_large_n_is_finite() {
        let v = lchoose(1.0e6, 5.0e5);
        assert!(v.is_finite());
        assert!(v > 0.0);
    }

    #[test]
    fn test_lchoose_out_of_domain() {
        assert_eq!(lchoose(5.0, 6.0), f64::NEG_INFINITY);
        assert_eq!(lchoose(5.0, -1.0), f64::NEG_INFINITY);
        assert_eq!(lchoose(-2.0, 1.0), f64::NEG_INFINITY);
        assert!(lchoose(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_mean_variance() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(mean(&data), 2.5);
        assert_relative_eq!(variance(&data), 5.0 / 3.0);
        assert!(variance(&[1.0]).is_nan());
    }
}
