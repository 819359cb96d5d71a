use thiserror::Error;

/// Errors that can occur while fitting or computing a hypothesis test
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Model construction errors
    #[error("{test} requires {expected} level(s), got {found}")]
    LevelCount {
        test: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("Dimension mismatch: y has {y_len} elements, X has {x_rows} rows")]
    DimensionMismatch { y_len: usize, x_rows: usize },

    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Invalid group indicator {value} at row {row} (expected 0 or 1)")]
    InvalidGroupIndicator { row: usize, value: f64 },

    #[error("Paired samples must have equal length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    // Degenerate input errors
    #[error("Insufficient data: group {group} has {found} non-missing observations (need at least {needed})")]
    InsufficientData {
        group: usize,
        needed: usize,
        found: usize,
    },

    #[error("All observations are missing or NaN")]
    NoValidData,

    #[error("Zero variance: {0}")]
    ZeroVariance(&'static str),

    // Option validation errors
    #[error("Invalid confidence level: {0} (must be in (0, 1))")]
    InvalidConfidenceLevel(f64),

    #[error("Invalid variance ratio: {0} (must be finite and > 0)")]
    InvalidRatio(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
