use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::analysis::asymmetry::indicator;
use crate::analysis::correlation::correlate_with;
use crate::analysis::lead_lag::scan_lead_lag_with;
use crate::config::{AnalysisConfig, DEBUG_FLAGS};
use crate::domain::MetricPair;
use crate::errors::LagError;
use crate::models::{CorrelationResult, LeadLagScan, TickerFrame, TimeSeries, find_matching_frame};
use crate::utils::date_span;

/// One cell of the baseline correlation table.
#[derive(Debug)]
pub struct CorrelationRow {
    pub ticker: String,
    pub pair: MetricPair,
    pub result: Result<CorrelationResult>,
}

/// Lead/lag outcome for one ticker.
#[derive(Debug)]
pub struct TickerLeadLag {
    pub ticker: String,
    pub pair: MetricPair,
    pub outcome: Result<LeadLagOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadLagOutcome {
    /// First and last date of the unshifted series
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub scan: LeadLagScan,
    /// Missing when the profile lacks usable entries on one side
    pub indicator: Result<f64, LagError>,
}

/// The signal/target series for `ticker`, pulled out of whichever frame carries it.
pub fn series_for(frames: &[TickerFrame], ticker: &str, pair: MetricPair) -> Result<TimeSeries> {
    let frame = find_matching_frame(frames, ticker)?;
    TimeSeries::from_frame(frame, pair)
        .with_context(|| format!("Cannot build {} series for {}", pair, ticker))
}

/// Unshifted correlation for every configured ticker and every pair.
/// A failure in one cell (missing data, too few rows) only affects that cell.
pub fn baseline_correlations(
    config: &AnalysisConfig,
    frames: &[TickerFrame],
    pairs: &[MetricPair],
) -> Vec<CorrelationRow> {
    let mut rows = Vec::with_capacity(config.tickers.len() * pairs.len());

    for ticker in &config.tickers {
        for &pair in pairs {
            let result = series_for(frames, ticker, pair).and_then(|series| {
                correlate_with(&series, config.method)
                    .with_context(|| format!("Cannot correlate {} for {}", pair, ticker))
            });

            if let Err(e) = &result {
                log::warn!("[study] {} {}: {:#}", ticker, pair, e);
            }

            rows.push(CorrelationRow {
                ticker: ticker.clone(),
                pair,
                result,
            });
        }
    }

    rows
}

/// Lead/lag scan plus asymmetry indicator for every configured ticker.
/// Each ticker is analyzed on its own; an error is recorded against that ticker
/// and the study moves on.
pub fn run_lead_lag_study(
    config: &AnalysisConfig,
    frames: &[TickerFrame],
    pair: MetricPair,
) -> Vec<TickerLeadLag> {
    config
        .tickers
        .iter()
        .map(|ticker| {
            if DEBUG_FLAGS.log_study {
                log::info!("[study] Scanning {} ({}) over {:?}", ticker, pair, config.offsets);
            }

            let outcome = analyze_ticker(config, frames, ticker, pair);

            match &outcome {
                Ok(o) => {
                    if let Err(e) = &o.indicator {
                        log::warn!("[study] {} {}: no indicator ({})", ticker, pair, e);
                    }
                }
                Err(e) => log::warn!("[study] {} {}: {:#}", ticker, pair, e),
            }

            TickerLeadLag {
                ticker: ticker.clone(),
                pair,
                outcome,
            }
        })
        .collect()
}

fn analyze_ticker(
    config: &AnalysisConfig,
    frames: &[TickerFrame],
    ticker: &str,
    pair: MetricPair,
) -> Result<LeadLagOutcome> {
    let series = series_for(frames, ticker, pair)?;
    let scan = scan_lead_lag_with(&series, &config.offsets, config.method)
        .with_context(|| format!("Lead/lag scan failed for {}", ticker))?;
    let indicator = indicator(&scan.profile);

    Ok(LeadLagOutcome {
        period: date_span(series.dates()),
        scan,
        indicator,
    })
}
