//! Configuration module for the lead/lag study.

mod analysis;
mod debug;
mod types;

// Public
pub mod constants;
pub mod tickers;

// Re-export commonly used items
pub use analysis::AnalysisConfig;
pub use debug::{DEBUG_FLAGS, LogFlags};
pub use tickers::TICKERS;
pub use types::{Alpha, CorrelationMethod};
