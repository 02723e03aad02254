//! Runtime analysis configuration

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_ALPHA, DEFAULT_OFFSETS};
use crate::config::tickers::TICKERS;
use crate::config::{Alpha, CorrelationMethod};

/// Everything one analysis run needs. Passed explicitly into the study entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Ticker symbols to analyze, in report order
    pub tickers: Vec<String>,

    /// Shift offsets (trading days) for the lead/lag scan. Must include 0.
    pub offsets: Vec<i32>,

    /// Family-wise significance level before Bonferroni correction.
    /// Only the report uses it; the engine always returns raw p-values.
    pub alpha: Alpha,

    pub method: CorrelationMethod,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tickers: TICKERS.iter().map(|t| t.to_string()).collect(),
            offsets: DEFAULT_OFFSETS.to_vec(),
            alpha: DEFAULT_ALPHA,
            method: CorrelationMethod::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse from JSON. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse analysis config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.tickers.is_empty(), "Analysis config lists no tickers");
        ensure!(
            self.offsets.contains(&0),
            "Offsets {:?} must include the 0 baseline",
            self.offsets
        );
        if !self.alpha.is_valid() {
            bail!("Alpha must be in (0, 1], got {}", self.alpha.value());
        }
        Ok(())
    }
}
