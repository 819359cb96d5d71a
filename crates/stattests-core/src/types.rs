use std::fmt;

/// Alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// The statistic differs from its null value in either direction
    #[default]
    TwoSided,
    /// The statistic is smaller than its null value
    Less,
    /// The statistic is larger than its null value
    Greater,
}

/// Variant of Student's t-test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTestKind {
    /// One sample compared against a reference mean
    OneSample,
    /// Paired observations, tested through their differences
    Paired,
    /// Two independent samples with pooled (equal) variance
    Simple,
    /// Two independent samples with Welch–Satterthwaite degrees of freedom
    Welch,
}

impl TTestKind {
    /// Select the variant from the option flags and the number of group levels
    pub fn from_options(options: &TTestOptions, n_levels: usize) -> Self {
        match (options.paired, n_levels) {
            (true, _) => TTestKind::Paired,
            (false, 1) => TTestKind::OneSample,
            (false, _) if options.equal_variance => TTestKind::Simple,
            (false, _) => TTestKind::Welch,
        }
    }

    /// Human readable test name
    pub fn name(self) -> &'static str {
        match self {
            TTestKind::OneSample => "One sample t-test",
            TTestKind::Paired => "Paired t-test",
            TTestKind::Simple => "Two sample t-test",
            TTestKind::Welch => "Welch two sample t-test",
        }
    }
}

impl fmt::Display for TTestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for t-tests
#[derive(Debug, Clone)]
pub struct TTestOptions {
    /// Perform a paired test (default: false)
    pub paired: bool,
    /// Assume equal variances in the two groups (default: false, Welch)
    pub equal_variance: bool,
    /// Hypothesized mean for the one-sample test, ignored otherwise (default: 0.0)
    pub reference_mean: f64,
    /// Confidence level for CI (default: 0.95)
    pub confidence_level: f64,
    /// Alternative hypothesis (default: two-sided)
    pub alternative: Alternative,
}

impl Default for TTestOptions {
    fn default() -> Self {
        Self {
            paired: false,
            equal_variance: false,
            reference_mean: 0.0,
            confidence_level: 0.95,
            alternative: Alternative::TwoSided,
        }
    }
}

/// Options for the F-test of equal variances
#[derive(Debug, Clone)]
pub struct FTestOptions {
    /// Hypothesized ratio of the population variances (default: 1.0)
    pub ratio: f64,
    /// Confidence level for CI (default: 0.95)
    pub confidence_level: f64,
    /// Alternative hypothesis (default: two-sided)
    pub alternative: Alternative,
}

impl Default for FTestOptions {
    fn default() -> Self {
        Self {
            ratio: 1.0,
            confidence_level: 0.95,
            alternative: Alternative::TwoSided,
        }
    }
}

/// Options for the one-sample Kolmogorov-Smirnov test
#[derive(Debug, Clone, Default)]
pub struct KsTestOptions {
    /// Alternative hypothesis (default: two-sided)
    pub alternative: Alternative,
}

/// Confidence interval bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Whether `value` lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Result of a t-test
#[derive(Debug, Clone)]
pub struct TTestResult {
    /// Which variant was computed
    pub kind: TTestKind,
    /// t statistic
    pub statistic: f64,
    /// Degrees of freedom (non-integer for Welch)
    pub df: f64,
    /// p-value
    pub p_value: f64,
    /// Mean, mean difference, or mean of paired differences
    pub estimate: f64,
    /// Hypothesized value of `estimate` (always 0 unless one-sample)
    pub reference_mean: f64,
    /// Standard error of `estimate`
    pub std_error: f64,
    /// Confidence interval for `estimate`
    pub conf_int: ConfidenceInterval,
    /// Confidence level used
    pub confidence_level: f64,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Group 1 sample size (number of pairs for paired tests)
    pub n1: usize,
    /// Group 2 sample size (0 for one-sample tests)
    pub n2: usize,
    /// Test method/name
    pub method: String,
}

/// Result of an F-test of equal variances
#[derive(Debug, Clone)]
pub struct FTestResult {
    /// F statistic
    pub statistic: f64,
    /// Numerator degrees of freedom
    pub df1: f64,
    /// Denominator degrees of freedom
    pub df2: f64,
    /// p-value
    pub p_value: f64,
    /// Ratio of the sample variances
    pub estimate: f64,
    /// Confidence interval for the ratio of population variances
    pub conf_int: ConfidenceInterval,
    /// Confidence level used
    pub confidence_level: f64,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Group 1 sample size
    pub n1: usize,
    /// Group 2 sample size
    pub n2: usize,
    /// Test method/name
    pub method: String,
}

/// Result of a one-sample Kolmogorov-Smirnov test
#[derive(Debug, Clone)]
pub struct KsTestResult {
    /// Statistic for the chosen alternative (D, D+ or D-)
    pub statistic: f64,
    /// Largest amount by which the empirical CDF exceeds the reference CDF
    pub d_plus: f64,
    /// Largest amount by which the reference CDF exceeds the empirical CDF
    pub d_minus: f64,
    /// p-value
    pub p_value: f64,
    /// Number of non-missing observations
    pub n: usize,
    /// Alternative hypothesis
    pub alternative: Alternative,
    /// Test method/name
    pub method: String,
}
