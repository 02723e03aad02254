// The lead/lag correlation engine and the study runner built on it
pub mod asymmetry;
pub mod correlation;
pub mod lead_lag;
pub mod shift;
pub mod study;

pub use asymmetry::{bias, indicator};
pub use correlation::{correlate, correlate_with};
pub use lead_lag::{scan_lead_lag, scan_lead_lag_with};
pub use shift::shift;
pub use study::{
    CorrelationRow, LeadLagOutcome, TickerLeadLag, baseline_correlations, run_lead_lag_study,
    series_for,
};
