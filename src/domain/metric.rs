use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A named column of a ticker frame. The last three are derived from the close.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[strum(to_string = "Close")]
    Close,
    #[strum(to_string = "Volume")]
    Volume,
    #[strum(to_string = "Mentions")]
    Mentions,
    #[strum(to_string = "Sentiment")]
    Sentiment,
    /// (close - prev close) / prev close
    #[strum(to_string = "Price Change")]
    PriceChangePct,
    /// |price change|, the volatility proxy
    #[strum(to_string = "Volatility")]
    AbsPriceChangePct,
    /// sign of the price change: +1 up, -1 down, 0 flat
    #[strum(to_string = "Direction")]
    PriceDirection,
}

impl Metric {
    /// Discussion-side metrics (what we expect to lead or lag).
    pub fn is_social(&self) -> bool {
        matches!(self, Metric::Mentions | Metric::Sentiment)
    }

    /// Derived metrics have no value on the first row of a frame.
    pub fn is_derived(&self) -> bool {
        matches!(
            self,
            Metric::PriceChangePct | Metric::AbsPriceChangePct | Metric::PriceDirection
        )
    }
}

/// One signal-vs-target analysis, e.g. Mentions vs Volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricPair {
    pub signal: Metric,
    pub target: Metric,
}

impl MetricPair {
    pub const fn new(signal: Metric, target: Metric) -> Self {
        Self { signal, target }
    }

    /// The pairings the study reports on: discussion activity against volume,
    /// volatility and direction.
    pub const STUDY: &'static [MetricPair] = &[
        MetricPair::new(Metric::Mentions, Metric::Volume),
        MetricPair::new(Metric::Mentions, Metric::AbsPriceChangePct),
        MetricPair::new(Metric::Sentiment, Metric::PriceChangePct),
        MetricPair::new(Metric::Sentiment, Metric::PriceDirection),
    ];
}

impl std::fmt::Display for MetricPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} vs {}", self.signal, self.target)
    }
}
