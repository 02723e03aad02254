use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day for one ticker, as handed over by the data loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,

    pub close_price: f64,
    pub volume: f64,

    /// Forum posts/comments referencing the ticker that day
    pub mentions: f64,
    /// Aggregate tone of the day's discussion. NaN when there was nothing to score.
    pub sentiment: f64,
}

impl DailyRecord {
    // A constructor for convenience
    pub fn new(date: NaiveDate, close: f64, volume: f64, mentions: f64, sentiment: f64) -> Self {
        DailyRecord {
            date,
            close_price: close,
            volume,
            mentions,
            sentiment,
        }
    }
}
