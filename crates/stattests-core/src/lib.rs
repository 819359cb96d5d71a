//! stattests-core: hypothesis testing library
//!
//! This crate fits t-tests (one sample, paired, Student, Welch), the F-test
//! for equality of variances and the one-sample Kolmogorov-Smirnov test,
//! either from plain vectors or from a model matrix with group levels.

pub mod distribution;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod tests;
pub mod types;

pub use distribution::{CdfFn, ContinuousCdf};
pub use errors::{StatsError, StatsResult};
pub use models::{FTestModel, TTestModel};
pub use numeric::{filter_na, isna, lchoose, Observation};
pub use tests::distributional::{ks_test, ks_test_with};
pub use tests::parametric::{
    f_test, f_test_matrix, fit_f_test, fit_t_test, t_test, t_test_matrix, t_test_one_sample,
};
pub use types::*;
