use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;

use crate::config::CorrelationMethod;
use crate::config::constants::indicator::NEUTRAL_BAND;
use crate::errors::LagError;
use crate::models::correlation::CorrelationResult;

/// Correlation per offset for one ticker. Exactly one entry per offset that
/// could be computed; the offset 0 entry is the unshifted baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadLagProfile {
    pub ticker: String,
    pub method: CorrelationMethod,
    entries: BTreeMap<i32, CorrelationResult>,
}

impl LeadLagProfile {
    pub fn new(ticker: impl Into<String>, method: CorrelationMethod) -> Self {
        Self {
            ticker: ticker.into(),
            method,
            entries: BTreeMap::new(),
        }
    }

    /// Build from already computed results, keyed by each result's own offset.
    /// A later result for the same offset replaces an earlier one.
    pub fn from_results<I>(ticker: impl Into<String>, method: CorrelationMethod, results: I) -> Self
    where
        I: IntoIterator<Item = CorrelationResult>,
    {
        let mut profile = Self::new(ticker, method);
        for res in results {
            profile.insert(res);
        }
        profile
    }

    pub(crate) fn insert(&mut self, result: CorrelationResult) {
        self.entries.insert(result.offset, result);
    }

    pub fn get(&self, offset: i32) -> Option<&CorrelationResult> {
        self.entries.get(&offset)
    }

    pub fn baseline(&self) -> Option<&CorrelationResult> {
        self.get(0)
    }

    /// Entries in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = &CorrelationResult> {
        self.entries.values()
    }

    pub fn offsets(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.keys().copied()
    }

    /// k < 0: target paired with later signal values (signal lags)
    pub fn lag_side(&self) -> impl Iterator<Item = &CorrelationResult> {
        self.entries.range(..0).map(|(_, res)| res)
    }

    /// k > 0: target paired with earlier signal values (signal leads)
    pub fn lead_side(&self) -> impl Iterator<Item = &CorrelationResult> {
        self.entries.range(1..).map(|(_, res)| res)
    }

    /// The offset with the largest |r| among defined entries.
    pub fn strongest(&self) -> Option<&CorrelationResult> {
        self.iter()
            .filter(|res| res.is_defined())
            .max_by(|a, b| a.r.abs().total_cmp(&b.r.abs()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An offset the scanner could not compute, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedOffset {
    pub offset: i32,
    pub reason: LagError,
}

/// Scanner output: the partial profile plus everything that was left out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadLagScan {
    pub profile: LeadLagProfile,
    /// Ascending by offset
    pub skipped: Vec<SkippedOffset>,
}

impl LeadLagScan {
    pub fn skipped_offsets(&self) -> Vec<i32> {
        self.skipped.iter().map(|s| s.offset).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Reading of the asymmetry indicator's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum LeadLagBias {
    /// Discussion moves before the market (indicator < 0)
    #[strum(to_string = "Signal leads")]
    Leads,
    /// Discussion reacts to the market (indicator > 0)
    #[strum(to_string = "Signal lags")]
    Lags,
    #[strum(to_string = "No bias")]
    Neutral,
}

impl LeadLagBias {
    /// The indicator is lag-side mean minus lead-side mean, so stronger
    /// correlation at positive offsets (past signal vs current target) makes it
    /// negative.
    pub fn from_indicator(indicator: f64) -> Self {
        if indicator < -NEUTRAL_BAND {
            Self::Leads
        } else if indicator > NEUTRAL_BAND {
            Self::Lags
        } else {
            Self::Neutral
        }
    }
}
