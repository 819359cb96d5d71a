//! Reference distribution capability for goodness-of-fit tests

use statrs::distribution::ContinuousCDF;

/// A continuous univariate distribution, seen only through its CDF
pub trait ContinuousCdf {
    /// Probability that a draw is less than or equal to `x`
    fn cdf(&self, x: f64) -> f64;
}

impl<D> ContinuousCdf for D
where
    D: ContinuousCDF<f64, f64>,
{
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        ContinuousCDF::cdf(self, x)
    }
}

/// Adapter turning a closure into a [`ContinuousCdf`]
///
/// ```
/// use stattests_core::distribution::{CdfFn, ContinuousCdf};
///
/// let uniform = CdfFn(|x: f64| x.clamp(0.0, 1.0));
/// assert_eq!(uniform.cdf(0.25), 0.25);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CdfFn<F>(pub F);

impl<F> ContinuousCdf for CdfFn<F>
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}
