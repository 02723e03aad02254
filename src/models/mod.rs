mod correlation;
mod lead_lag_profile;
mod ticker_frame;
mod timeseries;

pub use {
    correlation::CorrelationResult,
    lead_lag_profile::{LeadLagBias, LeadLagProfile, LeadLagScan, SkippedOffset},
    ticker_frame::{TickerFrame, find_matching_frame},
    timeseries::{PairedColumns, ShiftedSeries, TimeSeries},
};
