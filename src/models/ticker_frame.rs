use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DailyRecord, Metric};
use crate::errors::LagError;
use crate::utils::{first_unordered_index, pct_change, sign};

// ============================================================================
// TickerFrame: the daily table for one ticker, one column per field
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TickerFrame {
    pub ticker: String,

    pub dates: Vec<NaiveDate>,

    // Market
    pub close_prices: Vec<f64>,
    pub volumes: Vec<f64>,

    // Discussion
    pub mentions: Vec<f64>,
    pub sentiments: Vec<f64>,
}

pub fn find_matching_frame<'a>(frames: &'a [TickerFrame], ticker: &str) -> Result<&'a TickerFrame> {
    frames
        .iter()
        .find(|frame| frame.ticker == ticker)
        .ok_or_else(|| anyhow!("No daily data found for ticker {}", ticker))
}

impl TickerFrame {
    /// Build a frame from loader rows. Rows may arrive in any order; two rows
    /// on the same date are rejected.
    pub fn from_records(
        ticker: impl Into<String>,
        mut records: Vec<DailyRecord>,
    ) -> Result<Self, LagError> {
        records.sort_by_key(|r| r.date);

        let len = records.len();
        let mut frame = Self {
            ticker: ticker.into(),
            dates: Vec::with_capacity(len),
            close_prices: Vec::with_capacity(len),
            volumes: Vec::with_capacity(len),
            mentions: Vec::with_capacity(len),
            sentiments: Vec::with_capacity(len),
        };

        for r in records {
            frame.dates.push(r.date);
            frame.close_prices.push(r.close_price);
            frame.volumes.push(r.volume);
            frame.mentions.push(r.mentions);
            frame.sentiments.push(r.sentiment);
        }

        // Sorted, so the only way to be out of order is a duplicate date
        if let Some(index) = first_unordered_index(&frame.dates) {
            return Err(LagError::UnorderedDates { index });
        }

        Ok(frame)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The values of one metric, row-aligned with `dates`.
    /// Derived metrics are NaN on the first row.
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        match metric {
            Metric::Close => self.close_prices.clone(),
            Metric::Volume => self.volumes.clone(),
            Metric::Mentions => self.mentions.clone(),
            Metric::Sentiment => self.sentiments.clone(),
            Metric::PriceChangePct => pct_change(&self.close_prices),
            Metric::AbsPriceChangePct => pct_change(&self.close_prices)
                .into_iter()
                .map(f64::abs)
                .collect(),
            Metric::PriceDirection => pct_change(&self.close_prices)
                .into_iter()
                .map(sign)
                .collect(),
        }
    }

    /// First row on which `metric` can have a value.
    pub fn first_defined_row(metric: Metric) -> usize {
        if metric.is_derived() { 1 } else { 0 }
    }
}
