//! Presentation-side helpers: significance flagging and text tables.
mod reporter;
mod significance;

pub use {
    reporter::StudyReporter,
    significance::{FlaggedRow, RowStatus, SignificanceReport, bonferroni_alpha},
};
