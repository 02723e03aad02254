//! Small value types shared by the configuration and the engine.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Significance level, clamped to (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alpha(f64);

impl Alpha {
    pub const DEFAULT_VALUE: f64 = 0.05;
    pub const DEFAULT: Self = Self(Self::DEFAULT_VALUE);
    pub const MIN_VALUE: f64 = f64::MIN_POSITIVE;

    pub const fn new(val: f64) -> Self {
        let v = if val < Self::MIN_VALUE {
            Self::MIN_VALUE
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Deserialized values skip the clamp in `new`.
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::MIN_VALUE && self.0 <= 1.0
    }

    /// Bonferroni correction: alpha / number_of_tests. Zero tests counts as one.
    pub fn bonferroni(self, tests: usize) -> Self {
        Self::new(self.0 / tests.max(1) as f64)
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Alpha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Which correlation coefficient to compute.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    #[default]
    #[strum(to_string = "Pearson")]
    Pearson,
    /// Pearson over average ranks
    #[strum(to_string = "Spearman")]
    Spearman,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_clamps() {
        assert_eq!(Alpha::new(2.0).value(), 1.0);
        assert_eq!(Alpha::new(-1.0).value(), Alpha::MIN_VALUE);
        assert_eq!(Alpha::default().value(), 0.05);
    }

    #[test]
    fn test_bonferroni() {
        let corrected = Alpha::DEFAULT.bonferroni(10);
        assert!((corrected.value() - 0.005).abs() < 1e-15);
        assert_eq!(Alpha::DEFAULT.bonferroni(0), Alpha::DEFAULT);
    }

    #[test]
    fn test_alpha_validity_after_deserialize() {
        let a: Alpha = serde_json::from_str("1.5").unwrap();
        assert!(!a.is_valid());
        let b: Alpha = serde_json::from_str("0.01").unwrap();
        assert!(b.is_valid());
    }

    #[test]
    fn test_method_serde_names() {
        let m: CorrelationMethod = serde_json::from_str("\"spearman\"").unwrap();
        assert_eq!(m, CorrelationMethod::Spearman);
        assert_eq!(m.to_string(), "Spearman");
    }
}
