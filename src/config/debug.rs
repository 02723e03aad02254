//! Debugging feature flags.

pub struct LogFlags {
    /// Per-offset results as the lead/lag scanner produces them.
    pub log_scan: bool,

    /// Offsets dropped from a profile (and why).
    pub log_skipped_offsets: bool,

    /// Per-ticker progress of the study runner.
    pub log_study: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DEBUG_FLAGS: LogFlags = LogFlags {
    log_skipped_offsets: true,

    log_scan: false,
    log_study: false,
    log_performance: false,
};
