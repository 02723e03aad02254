//! Bonferroni-corrected flagging of the baseline correlation table.
//!
//! The engine only hands out raw p-values. Deciding what counts as significant
//! happens here, once the size of the test family is known.

use crate::analysis::CorrelationRow;
use crate::config::{Alpha, AnalysisConfig};
use crate::domain::MetricPair;
use crate::models::CorrelationResult;

/// alpha / number_of_tests
pub fn bonferroni_alpha(alpha: Alpha, tests: usize) -> Alpha {
    alpha.bonferroni(tests)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowStatus {
    /// Counted in the test family
    Tested {
        result: CorrelationResult,
        significant: bool,
    },
    /// Zero variance in a column: r is undefined, not counted
    Undefined { n: usize },
    /// No result at all, with the reason
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedRow {
    pub ticker: String,
    pub pair: MetricPair,
    pub status: RowStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignificanceReport {
    pub alpha: Alpha,
    /// Number of defined results, the Bonferroni divisor
    pub tests: usize,
    pub corrected_alpha: Alpha,
    pub rows: Vec<FlaggedRow>,
}

impl SignificanceReport {
    /// Flags `rows` against the configured alpha, corrected for the family size.
    pub fn from_rows(config: &AnalysisConfig, rows: &[CorrelationRow]) -> Self {
        let alpha = config.alpha;
        let tests = rows
            .iter()
            .filter(|row| matches!(&row.result, Ok(res) if res.is_defined()))
            .count();
        let corrected_alpha = bonferroni_alpha(alpha, tests);

        let rows = rows
            .iter()
            .map(|row| {
                let status = match &row.result {
                    Ok(res) if res.is_defined() => RowStatus::Tested {
                        result: *res,
                        significant: res.is_significant(corrected_alpha),
                    },
                    Ok(res) => RowStatus::Undefined { n: res.n },
                    Err(e) => RowStatus::Failed(format!("{:#}", e)),
                };
                FlaggedRow {
                    ticker: row.ticker.clone(),
                    pair: row.pair,
                    status,
                }
            })
            .collect();

        Self {
            alpha,
            tests,
            corrected_alpha,
            rows,
        }
    }

    pub fn significant(&self) -> impl Iterator<Item = &FlaggedRow> {
        self.rows
            .iter()
            .filter(|row| matches!(row.status, RowStatus::Tested { significant: true, .. }))
    }

    /// Rows that could not be tested (undefined or failed).
    pub fn untested(&self) -> impl Iterator<Item = &FlaggedRow> {
        self.rows
            .iter()
            .filter(|row| !matches!(row.status, RowStatus::Tested { .. }))
    }
}
