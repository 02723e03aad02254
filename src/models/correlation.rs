use serde::{Deserialize, Serialize};

use crate::config::Alpha;

/// One correlation measurement at one offset. Never mutated after creation.
///
/// `r` and `p_value` are NaN when either column has zero variance: the
/// coefficient is undefined there, which is reported rather than raised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub offset: i32,
    /// Correlation coefficient in [-1, 1], or NaN
    pub r: f64,
    /// Two-tailed p-value in [0, 1], or NaN
    pub p_value: f64,
    /// Paired observations used
    pub n: usize,
}

impl CorrelationResult {
    /// The sentinel for an undefined coefficient.
    pub const UNDEFINED: f64 = f64::NAN;

    pub fn undefined(offset: i32, n: usize) -> Self {
        Self {
            offset,
            r: Self::UNDEFINED,
            p_value: Self::UNDEFINED,
            n,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.r.is_finite()
    }

    /// Raw test against `alpha`. Undefined results are never significant.
    pub fn is_significant(&self, alpha: Alpha) -> bool {
        self.is_defined() && self.p_value < alpha.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_is_never_significant() {
        let res = CorrelationResult::undefined(2, 10);
        assert!(!res.is_defined());
        assert!(res.r.is_nan() && res.p_value.is_nan());
        assert!(!res.is_significant(Alpha::new(1.0)));
    }

    #[test]
    fn test_is_significant() {
        let res = CorrelationResult {
            offset: 0,
            r: 0.4,
            p_value: 0.003,
            n: 60,
        };
        assert!(res.is_significant(Alpha::DEFAULT));
        assert!(!res.is_significant(Alpha::DEFAULT.bonferroni(20)));
    }
}
