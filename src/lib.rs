#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod errors;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{
    CorrelationRow, LeadLagOutcome, TickerLeadLag, baseline_correlations, correlate,
    correlate_with, indicator, run_lead_lag_study, scan_lead_lag, scan_lead_lag_with, shift,
};
pub use config::{AnalysisConfig, Alpha, CorrelationMethod};
pub use domain::{DailyRecord, Metric, MetricPair};
pub use errors::LagError;
pub use models::{
    CorrelationResult, LeadLagBias, LeadLagProfile, LeadLagScan, PairedColumns, ShiftedSeries,
    SkippedOffset, TickerFrame, TimeSeries,
};
pub use report::{SignificanceReport, StudyReporter};
