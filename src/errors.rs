use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All errors generated by the lead/lag engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum LagError {
    #[error("offset {offset} is too large for a series of {len} rows")]
    InvalidOffset { offset: i32, len: usize },

    #[error("insufficient data: {n} paired observation(s), need at least 2")]
    InsufficientData { n: usize },

    #[error(
        "degenerate profile: {negative} usable negative-offset and {positive} usable \
         positive-offset entries, need at least one of each"
    )]
    DegenerateProfile { negative: usize, positive: usize },

    #[error("offset set does not contain the 0 baseline")]
    MissingBaseline,

    #[error("column lengths differ: {dates} dates, {signal} signal, {target} target")]
    LengthMismatch {
        dates: usize,
        signal: usize,
        target: usize,
    },

    #[error("dates are not strictly increasing at row {index}")]
    UnorderedDates { index: usize },

    #[error("target value at row {index} is not finite")]
    NonFiniteTarget { index: usize },

    #[error("t-distribution error: {0}")]
    Distribution(String),
}

impl LagError {
    /// Errors the lead/lag scanner recovers from by skipping the offset.
    pub fn is_offset_scoped(&self) -> bool {
        matches!(
            self,
            LagError::InvalidOffset { .. } | LagError::InsufficientData { .. }
        )
    }
}
