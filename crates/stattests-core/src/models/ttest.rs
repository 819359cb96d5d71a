//! t-test model

use faer::Mat;

use super::{
    check_dimensions, complete_rows, group_indicators, intercept_design, select_rows,
    split_groups, two_group_design, unique_levels,
};
use crate::errors::{StatsError, StatsResult};
use crate::numeric::Observation;
use crate::types::TTestKind;

/// Prepared samples for each t-test variant
#[derive(Debug, Clone)]
pub(crate) enum Samples {
    OneSample(Vec<f64>),
    /// Differences of the complete pairs
    Paired(Vec<f64>),
    Simple(Vec<f64>, Vec<f64>),
    Welch(Vec<f64>, Vec<f64>),
}

impl Samples {
    fn kind(&self) -> TTestKind {
        match self {
            Samples::OneSample(_) => TTestKind::OneSample,
            Samples::Paired(_) => TTestKind::Paired,
            Samples::Simple(..) => TTestKind::Simple,
            Samples::Welch(..) => TTestKind::Welch,
        }
    }
}

/// A fitted t-test model
///
/// Members
/// - `x`: model matrix
/// - `y`: vector whose means are compared
/// - `kind`: one sample, paired, simple or Welch
/// - `levels`: the unique group levels (1 or 2)
#[derive(Debug, Clone)]
pub struct TTestModel {
    x: Mat<f64>,
    y: Vec<f64>,
    levels: Vec<String>,
    samples: Samples,
}

impl TTestModel {
    /// Validate the inputs and build a model
    ///
    /// `OneSample` needs exactly one level and `Simple`/`Welch` exactly two.
    /// `Paired` accepts two levels, pairing rows by their order within each
    /// group, or a single level when `y` already holds the differences.
    pub fn fit<T, S>(x: Mat<f64>, y: &[T], levels: &[S], kind: TTestKind) -> StatsResult<Self>
    where
        T: Observation,
        S: AsRef<str>,
    {
        check_dimensions(&x, y)?;
        let levels = unique_levels(levels);

        let (allowed, expected) = match kind {
            TTestKind::OneSample => (1..=1, "exactly 1"),
            TTestKind::Paired => (1..=2, "1 or 2"),
            TTestKind::Simple | TTestKind::Welch => (2..=2, "exactly 2"),
        };
        if !allowed.contains(&levels.len()) {
            return Err(StatsError::LevelCount {
                test: kind.name(),
                expected,
                found: levels.len(),
            });
        }

        let (rows, samples) = match kind {
            TTestKind::Paired if levels.len() == 2 => paired_differences(&x, y)?,
            TTestKind::Paired => {
                let (rows, differences) = single_sample(&x, y);
                (rows, Samples::Paired(differences))
            }
            TTestKind::OneSample => {
                let (rows, values) = single_sample(&x, y);
                (rows, Samples::OneSample(values))
            }
            TTestKind::Simple => {
                let (rows, first, second) = split_groups(&x, y)?;
                (rows, Samples::Simple(first, second))
            }
            TTestKind::Welch => {
                let (rows, first, second) = split_groups(&x, y)?;
                (rows, Samples::Welch(first, second))
            }
        };

        let kept: Vec<usize> = rows.iter().map(|&(row, _)| row).collect();
        Ok(Self {
            x: select_rows(&x, &kept),
            y: rows.into_iter().map(|(_, v)| v).collect(),
            levels,
            samples,
        })
    }

    /// Build a one-sample model from a plain vector
    pub fn one_sample<T: Observation>(x: &[T]) -> StatsResult<Self> {
        Self::fit(intercept_design(x.len()), x, &["x"], TTestKind::OneSample)
    }

    /// Build a two-sample (or paired) model from two plain vectors
    pub fn two_sample<T: Observation>(x1: &[T], x2: &[T], kind: TTestKind) -> StatsResult<Self> {
        if kind == TTestKind::Paired && x1.len() != x2.len() {
            return Err(StatsError::LengthMismatch {
                left: x1.len(),
                right: x2.len(),
            });
        }
        let y: Vec<T> = x1.iter().chain(x2).copied().collect();
        Self::fit(
            two_group_design(x1.len(), x2.len()),
            &y,
            &["x1", "x2"],
            kind,
        )
    }

    /// Model matrix of the retained rows
    pub fn x(&self) -> &Mat<f64> {
        &self.x
    }

    /// Response values of the retained rows
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn kind(&self) -> TTestKind {
        self.samples.kind()
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub(crate) fn samples(&self) -> &Samples {
        &self.samples
    }
}

fn single_sample<T: Observation>(x: &Mat<f64>, y: &[T]) -> (Vec<(usize, f64)>, Vec<f64>) {
    let rows = complete_rows(x, y);
    let values = rows.iter().map(|&(_, v)| v).collect();
    (rows, values)
}

/// Pair the rows of the two groups by order of appearance and take differences
///
/// A pair is dropped when either response is missing.
fn paired_differences<T: Observation>(
    x: &Mat<f64>,
    y: &[T],
) -> StatsResult<(Vec<(usize, f64)>, Samples)> {
    let groups = group_indicators(x)?;

    let mut first = Vec::new();
    let mut second = Vec::new();
    for (row, group) in groups.iter().enumerate() {
        match group {
            Some(0) => first.push(row),
            Some(_) => second.push(row),
            None => {
                return Err(StatsError::InvalidGroupIndicator {
                    row,
                    value: f64::NAN,
                })
            }
        }
    }
    if first.len() != second.len() {
        return Err(StatsError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    let mut rows = Vec::with_capacity(first.len() + second.len());
    let mut differences = Vec::with_capacity(first.len());
    for (&i, &j) in first.iter().zip(&second) {
        if let (Some(u), Some(v)) = (y[i].value(), y[j].value()) {
            rows.push((i, u));
            rows.push((j, v));
            differences.push(u - v);
        }
    }
    rows.sort_unstable_by_key(|&(row, _)| row);

    Ok((rows, Samples::Paired(differences)))
}
