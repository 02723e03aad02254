use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::MetricPair;
use crate::errors::LagError;
use crate::models::ticker_frame::TickerFrame;
use crate::utils::first_unordered_index;

/// Anything with row-aligned signal and target columns that can be correlated.
pub trait PairedColumns {
    fn signal(&self) -> &[f64];
    fn target(&self) -> &[f64];

    /// Shift applied to the signal column relative to the target (0 = none).
    fn offset(&self) -> i32 {
        0
    }

    fn rows(&self) -> usize {
        self.target().len()
    }
}

// ============================================================================
// TimeSeries: one ticker's signal/target pair on a strictly increasing daily index
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    ticker: String,
    dates: Vec<NaiveDate>,
    signal: Vec<f64>,
    target: Vec<f64>,
}

impl TimeSeries {
    /// Checks the invariants: equal column lengths, strictly increasing dates,
    /// finite targets. Signal values may be missing (non-finite).
    pub fn new(
        ticker: impl Into<String>,
        dates: Vec<NaiveDate>,
        signal: Vec<f64>,
        target: Vec<f64>,
    ) -> Result<Self, LagError> {
        if dates.len() != signal.len() || dates.len() != target.len() {
            return Err(LagError::LengthMismatch {
                dates: dates.len(),
                signal: signal.len(),
                target: target.len(),
            });
        }

        if let Some(index) = first_unordered_index(&dates) {
            return Err(LagError::UnorderedDates { index });
        }

        if let Some(index) = target.iter().position(|v| !v.is_finite()) {
            return Err(LagError::NonFiniteTarget { index });
        }

        Ok(Self {
            ticker: ticker.into(),
            dates,
            signal,
            target,
        })
    }

    /// Extract one signal/target pairing from a frame. Leading rows on which a
    /// derived metric has no value yet are dropped, as are rows without a
    /// target value (a zero or missing close leaves the next change undefined).
    /// Missing signal values are kept for `correlate` to pass over.
    pub fn from_frame(frame: &TickerFrame, pair: MetricPair) -> Result<Self, LagError> {
        let start = TickerFrame::first_defined_row(pair.signal)
            .max(TickerFrame::first_defined_row(pair.target))
            .min(frame.len());

        let signal = frame.column(pair.signal);
        let target = frame.column(pair.target);

        let rows = start..frame.len();
        let (dates, (signal, target)): (Vec<NaiveDate>, (Vec<f64>, Vec<f64>)) = rows
            .filter(|&i| target[i].is_finite())
            .map(|i| (frame.dates[i], (signal[i], target[i])))
            .unzip();

        let dropped = frame.len() - start - dates.len();
        if dropped > 0 {
            log::debug!(
                "[frame] {} {}: dropped {} row(s) without a target value",
                frame.ticker,
                pair,
                dropped
            );
        }

        Self::new(frame.ticker.clone(), dates, signal, target)
    }

    /// For slices cut from an already validated series.
    pub(crate) fn from_validated_parts(
        ticker: String,
        dates: Vec<NaiveDate>,
        signal: Vec<f64>,
        target: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(dates.len(), signal.len());
        debug_assert_eq!(dates.len(), target.len());
        Self {
            ticker,
            dates,
            signal,
            target,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn signal(&self) -> &[f64] {
        &self.signal
    }

    pub fn target(&self) -> &[f64] {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl PairedColumns for TimeSeries {
    fn signal(&self) -> &[f64] {
        &self.signal
    }

    fn target(&self) -> &[f64] {
        &self.target
    }
}

/// A TimeSeries whose signal column has been moved `offset` rows against the target.
/// Dates are the target's dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftedSeries {
    offset: i32,
    series: TimeSeries,
}

impl ShiftedSeries {
    pub(crate) fn new(offset: i32, series: TimeSeries) -> Self {
        Self { offset, series }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    pub fn into_series(self) -> TimeSeries {
        self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl PairedColumns for ShiftedSeries {
    fn signal(&self) -> &[f64] {
        self.series.signal()
    }

    fn target(&self) -> &[f64] {
        self.series.target()
    }

    fn offset(&self) -> i32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyRecord, Metric};

    fn days(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
        (0..n)
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect()
    }

    #[test]
    fn test_new_validates_lengths() {
        let err = TimeSeries::new("GME", days(3), vec![1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            LagError::LengthMismatch {
                dates: 3,
                signal: 2,
                target: 3
            }
        );
    }

    #[test]
    fn test_new_validates_order() {
        let mut dates = days(3);
        dates.swap(1, 2);
        let err = TimeSeries::new("GME", dates, vec![0.0; 3], vec![0.0; 3]).unwrap_err();
        assert_eq!(err, LagError::UnorderedDates { index: 2 });
    }

    #[test]
    fn test_new_rejects_missing_target_but_not_missing_signal() {
        let err = TimeSeries::new("GME", days(3), vec![1.0; 3], vec![1.0, f64::NAN, 2.0])
            .unwrap_err();
        assert_eq!(err, LagError::NonFiniteTarget { index: 1 });

        let ok = TimeSeries::new("GME", days(3), vec![1.0, f64::NAN, 2.0], vec![1.0; 3]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_from_frame_drops_undefined_leading_row() {
        let records = days(4)
            .into_iter()
            .zip([10.0, 11.0, 12.0, 11.0])
            .enumerate()
            .map(|(i, (d, close))| DailyRecord::new(d, close, 100.0 * i as f64, i as f64, 0.0))
            .collect();
        let frame = TickerFrame::from_records("AMC", records).unwrap();

        let raw = TimeSeries::from_frame(&frame, MetricPair::new(Metric::Mentions, Metric::Volume))
            .unwrap();
        assert_eq!(raw.len(), 4);

        let derived = TimeSeries::from_frame(
            &frame,
            MetricPair::new(Metric::Mentions, Metric::PriceDirection),
        )
        .unwrap();
        assert_eq!(derived.len(), 3);
        assert_eq!(derived.dates()[0], frame.dates[1]);
        assert_eq!(derived.target(), &[1.0, 1.0, -1.0]);
        assert_eq!(derived.ticker(), "AMC");
    }

    #[test]
    fn test_paired_columns_offset_defaults_to_zero() {
        let ts = TimeSeries::new("GME", days(2), vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        assert_eq!(PairedColumns::offset(&ts), 0);
        assert_eq!(ts.rows(), 2);

        let shifted = ShiftedSeries::new(-1, ts.clone());
        assert_eq!(PairedColumns::offset(&shifted), -1);
        assert_eq!(shifted.into_series(), ts);
    }

    #[test]
    fn test_from_frame_drops_rows_without_target() {
        // Zero close on day 2: change on day 3 is undefined
        let closes = [10.0, 11.0, 0.0, 12.0, 13.0, 12.5];
        let records = days(6)
            .into_iter()
            .zip(closes)
            .enumerate()
            .map(|(i, (d, close))| DailyRecord::new(d, close, 100.0, i as f64, f64::NAN))
            .collect();
        let frame = TickerFrame::from_records("BBBY", records).unwrap();
        let dates = frame.dates.clone();

        let series = TimeSeries::from_frame(
            &frame,
            MetricPair::new(Metric::Mentions, Metric::PriceChangePct),
        )
        .unwrap();

        assert_eq!(series.len(), 4);
        assert_eq!(series.dates(), &[dates[1], dates[2], dates[4], dates[5]]);
        assert_eq!(series.signal(), &[1.0, 2.0, 4.0, 5.0]);
        assert!(series.target().iter().all(|v| v.is_finite()));

        // Missing signal values stay in place
        let sentiment = TimeSeries::from_frame(
            &frame,
            MetricPair::new(Metric::Sentiment, Metric::Volume),
        )
        .unwrap();
        assert_eq!(sentiment.len(), 6);
        assert!(sentiment.signal().iter().all(|v| v.is_nan()));
    }
}
