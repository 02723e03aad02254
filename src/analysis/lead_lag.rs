use itertools::Itertools;
use rayon::prelude::*;

use crate::analysis::correlation::correlate_with;
use crate::analysis::shift::shift;
use crate::config::constants::perf::SLOW_SCAN_MICROS;
use crate::config::{CorrelationMethod, DEBUG_FLAGS};
use crate::errors::LagError;
use crate::models::{CorrelationResult, LeadLagProfile, LeadLagScan, SkippedOffset, TimeSeries};

/// Pearson lead/lag scan. See [`scan_lead_lag_with`].
pub fn scan_lead_lag(base: &TimeSeries, offsets: &[i32]) -> Result<LeadLagScan, LagError> {
    scan_lead_lag_with(base, offsets, CorrelationMethod::Pearson)
}

/// Shifts `base` by every offset and correlates each shifted pairing.
///
/// Offsets are deduplicated and must contain 0. Each offset is computed
/// independently from the same base series (in parallel), then merged by
/// offset, so the result for one offset never depends on the others.
/// Offsets whose shift or correlation fails (too large, too few pairs left)
/// are left out of the profile and listed in `skipped` instead.
pub fn scan_lead_lag_with(
    base: &TimeSeries,
    offsets: &[i32],
    method: CorrelationMethod,
) -> Result<LeadLagScan, LagError> {
    let offsets: Vec<i32> = offsets.iter().copied().sorted_unstable().dedup().collect();
    if offsets.binary_search(&0).is_err() {
        return Err(LagError::MissingBaseline);
    }

    let outcomes: Vec<(i32, Result<CorrelationResult, LagError>)> =
        crate::trace_time!("scan_lead_lag", SLOW_SCAN_MICROS, {
            offsets
                .par_iter()
                .map(|&k| (k, shift(base, k).and_then(|s| correlate_with(&s, method))))
                .collect()
        });

    let mut profile = LeadLagProfile::new(base.ticker(), method);
    let mut skipped = Vec::new();

    for (offset, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                if DEBUG_FLAGS.log_scan {
                    log::debug!(
                        "[scan] {} k={:+} r={:.4} p={:.4} n={}",
                        base.ticker(),
                        offset,
                        result.r,
                        result.p_value,
                        result.n
                    );
                }
                profile.insert(result);
            }
            Err(reason) if reason.is_offset_scoped() => {
                if DEBUG_FLAGS.log_skipped_offsets {
                    log::warn!("[scan] {} skipping offset {:+}: {}", base.ticker(), offset, reason);
                }
                skipped.push(SkippedOffset { offset, reason });
            }
            Err(other) => return Err(other),
        }
    }

    Ok(LeadLagScan { profile, skipped })
}
