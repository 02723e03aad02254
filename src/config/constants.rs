use crate::config::Alpha;

// Top Level Constants
pub const DEFAULT_ALPHA: Alpha = Alpha::DEFAULT;

/// Symmetric shift window, in trading days. Must contain 0 (the baseline).
pub const DEFAULT_OFFSETS: &[i32] = &[-3, -2, -1, 0, 1, 2, 3];

pub mod correlation {
    /// Fewer paired observations than this and there is nothing to correlate.
    pub const MIN_PAIRS: usize = 2;
}

pub mod indicator {
    /// |indicator| at or below this is reported as no directional bias.
    pub const NEUTRAL_BAND: f64 = 1e-9;
}

pub mod perf {
    /// Scans slower than this get logged when performance logging is on.
    pub const SLOW_SCAN_MICROS: u128 = 5_000;
}
