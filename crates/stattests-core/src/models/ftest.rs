//! F-test model

use faer::Mat;

use super::{check_dimensions, select_rows, split_groups, two_group_design, unique_levels};
use crate::errors::{StatsError, StatsResult};
use crate::numeric::Observation;

/// A fitted F-test model
///
/// Members
/// - `x`: model matrix
/// - `y`: vector whose variances are compared
/// - `levels`: the unique group levels (exactly 2)
#[derive(Debug, Clone)]
pub struct FTestModel {
    x: Mat<f64>,
    y: Vec<f64>,
    levels: Vec<String>,
    first: Vec<f64>,
    second: Vec<f64>,
}

impl FTestModel {
    /// Validate the inputs and build a model
    pub fn fit<T, S>(x: Mat<f64>, y: &[T], levels: &[S]) -> StatsResult<Self>
    where
        T: Observation,
        S: AsRef<str>,
    {
        check_dimensions(&x, y)?;
        let levels = unique_levels(levels);
        if levels.len() != 2 {
            return Err(StatsError::LevelCount {
                test: "F-test",
                expected: "exactly 2",
                found: levels.len(),
            });
        }

        let (rows, first, second) = split_groups(&x, y)?;
        let kept: Vec<usize> = rows.iter().map(|&(row, _)| row).collect();

        Ok(Self {
            x: select_rows(&x, &kept),
            y: rows.into_iter().map(|(_, v)| v).collect(),
            levels,
            first,
            second,
        })
    }

    /// Build a model from two plain vectors
    pub fn two_sample<T: Observation>(x1: &[T], x2: &[T]) -> StatsResult<Self> {
        let y: Vec<T> = x1.iter().chain(x2).copied().collect();
        Self::fit(two_group_design(x1.len(), x2.len()), &y, &["x1", "x2"])
    }

    /// Model matrix of the retained rows
    pub fn x(&self) -> &Mat<f64> {
        &self.x
    }

    /// Response values of the retained rows
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub(crate) fn groups(&self) -> (&[f64], &[f64]) {
        (self.first.as_slice(), self.second.as_slice())
    }
}
