//! Test models
//!
//! A model is a validated snapshot of the input data: a design matrix, a
//! response vector and group levels, with missing rows already removed.
//! For two-level models the last column of the design matrix is the group
//! indicator (0 selects the first level, 1 the second).

mod ftest;
mod ttest;

pub use ftest::FTestModel;
pub use ttest::TTestModel;
pub(crate) use ttest::Samples;

use faer::Mat;

use crate::errors::{StatsError, StatsResult};
use crate::numeric::Observation;

/// Collapse levels to their unique values, keeping first-seen order
pub(crate) fn unique_levels<S: AsRef<str>>(levels: &[S]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for level in levels {
        let level = level.as_ref();
        if !unique.iter().any(|u| u == level) {
            unique.push(level.to_owned());
        }
    }
    unique
}

fn check_dimensions<T>(x: &Mat<f64>, y: &[T]) -> StatsResult<()> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if x.ncols() == 0 {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if x.nrows() != y.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_rows: x.nrows(),
        });
    }
    Ok(())
}

/// Group index (0 or 1) of every row, `None` where the indicator is NaN
fn group_indicators(x: &Mat<f64>) -> StatsResult<Vec<Option<usize>>> {
    let col = x.ncols() - 1;
    (0..x.nrows())
        .map(|row| {
            let value = x[(row, col)];
            if value.is_nan() {
                Ok(None)
            } else if value == 0.0 {
                Ok(Some(0))
            } else if value == 1.0 {
                Ok(Some(1))
            } else {
                Err(StatsError::InvalidGroupIndicator { row, value })
            }
        })
        .collect()
}

fn row_complete(x: &Mat<f64>, row: usize) -> bool {
    (0..x.ncols()).all(|j| !x[(row, j)].is_nan())
}

/// Rows whose response is present and whose design row has no NaN
fn complete_rows<T: Observation>(x: &Mat<f64>, y: &[T]) -> Vec<(usize, f64)> {
    y.iter()
        .enumerate()
        .filter_map(|(row, obs)| obs.value().map(|v| (row, v)))
        .filter(|&(row, _)| row_complete(x, row))
        .collect()
}

/// Split complete rows into the two groups named by the indicator column
fn split_groups<T: Observation>(
    x: &Mat<f64>,
    y: &[T],
) -> StatsResult<(Vec<(usize, f64)>, Vec<f64>, Vec<f64>)> {
    let groups = group_indicators(x)?;
    let rows = complete_rows(x, y);

    let mut first = Vec::new();
    let mut second = Vec::new();
    for &(row, v) in &rows {
        match groups[row] {
            Some(0) => first.push(v),
            Some(_) => second.push(v),
            None => {}
        }
    }
    Ok((rows, first, second))
}

/// Copy the selected rows of `x`
fn select_rows(x: &Mat<f64>, rows: &[usize]) -> Mat<f64> {
    Mat::from_fn(rows.len(), x.ncols(), |i, j| x[(rows[i], j)])
}

/// Intercept-only design matrix
pub(crate) fn intercept_design(n: usize) -> Mat<f64> {
    Mat::from_fn(n, 1, |_, _| 1.0)
}

/// Intercept plus group indicator: the first `n1` rows belong to group 0
pub(crate) fn two_group_design(n1: usize, n2: usize) -> Mat<f64> {
    Mat::from_fn(n1 + n2, 2, |i, j| match j {
        0 => 1.0,
        _ if i < n1 => 0.0,
        _ => 1.0,
    })
}
