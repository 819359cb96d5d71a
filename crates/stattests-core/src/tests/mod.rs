//! Statistical hypothesis testing
//!
//! - Parametric tests: t-tests (one sample, paired, simple, Welch), F-test
//! - Distributional tests: one-sample Kolmogorov-Smirnov


use std::fmt::Display;

use crate::{StatsError, StatsResult};

/// Convert a statrs distribution error to our StatsError
fn convert_error<E: Display>(e: E) -> StatsError {
    StatsError::Distribution(e.to_string())
}

fn check_confidence_level(level: f64) -> StatsResult<()> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(StatsError::InvalidConfidenceLevel(level))
    }
}

/// Fail unless `data` holds at least `needed` observations
fn require_observations(group: usize, data: &[f64], needed: usize) -> StatsResult<()> {
    if data.len() < needed {
        return Err(StatsError::InsufficientData {
            group,
            needed,
            found: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_confidence_level() {
        assert!(check_confidence_level(0.95).is_ok());
        assert!(check_confidence_level(0.5).is_ok());
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                check_confidence_level(bad),
                Err(StatsError::InvalidConfidenceLevel(_))
            ));
        }
    }

    #[test]
    fn test_require_observations() {
        assert!(require_observations(1, &[1.0, 2.0], 2).is_ok());
        assert_eq!(
            require_observations(2, &[1.0], 2).unwrap_err(),
            StatsError::InsufficientData {
                group: 2,
                needed: 2,
                found: 1
            }
        );
    }
}
