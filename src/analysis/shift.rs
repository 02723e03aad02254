use crate::errors::LagError;
use crate::models::{ShiftedSeries, TimeSeries};

/// Moves the signal column `offset` rows against the target along the row index
/// (trading days, not calendar days) and drops the rows left without a pair.
///
/// * `offset > 0`: row i pairs target[i] with signal[i - offset]. Past signal
///   against current target, so the signal "leads". The first `offset` rows go.
/// * `offset < 0`: row i pairs target[i] with signal[i + |offset|]. The signal
///   "lags". The last `|offset|` rows go.
/// * `offset == 0`: identity.
///
/// The result has `len - |offset|` rows; `|offset| >= len` is an error.
pub fn shift(series: &TimeSeries, offset: i32) -> Result<ShiftedSeries, LagError> {
    let len = series.len();
    let k = offset.unsigned_abs() as usize;

    if k >= len {
        return Err(LagError::InvalidOffset { offset, len });
    }

    if offset == 0 {
        return Ok(ShiftedSeries::new(0, series.clone()));
    }

    let keep = len - k;
    let (target_rows, signal_rows) = if offset > 0 {
        (k..len, 0..keep)
    } else {
        (0..keep, k..len)
    };

    let shifted = TimeSeries::from_validated_parts(
        series.ticker().to_string(),
        series.dates()[target_rows.clone()].to_vec(),
        series.signal()[signal_rows].to_vec(),
        series.target()[target_rows].to_vec(),
    );

    Ok(ShiftedSeries::new(offset, shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(n: usize) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2021, 2, 1).unwrap();
        let dates = (0..n)
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        let signal = (0..n).map(|i| i as f64).collect();
        let target = (0..n).map(|i| 100.0 + i as f64).collect();
        TimeSeries::new("GME", dates, signal, target).unwrap()
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let base = series(6);
        let shifted = shift(&base, 0).unwrap();
        assert_eq!(shifted.offset(), 0);
        assert_eq!(shifted.series(), &base);
    }

    #[test]
    fn test_length_is_n_minus_abs_k() {
        for n in 1..8usize {
            let base = series(n);
            for k in -(n as i32) + 1..n as i32 {
                let shifted = shift(&base, k).unwrap();
                assert_eq!(shifted.len(), n - k.unsigned_abs() as usize, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn test_positive_offset_pairs_past_signal_with_current_target() {
        let shifted = shift(&series(5), 2).unwrap();
        let s = shifted.series();
        assert_eq!(s.signal(), &[0.0, 1.0, 2.0]);
        assert_eq!(s.target(), &[102.0, 103.0, 104.0]);
        // Dates follow the target
        assert_eq!(s.dates()[0], NaiveDate::from_ymd_opt(2021, 2, 3).unwrap());
    }

    #[test]
    fn test_negative_offset_pairs_future_signal_with_current_target() {
        let shifted = shift(&series(5), -2).unwrap();
        let s = shifted.series();
        assert_eq!(s.signal(), &[2.0, 3.0, 4.0]);
        assert_eq!(s.target(), &[100.0, 101.0, 102.0]);
        assert_eq!(s.dates()[0], NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
    }

    #[test]
    fn test_offset_too_large() {
        let base = series(5);
        assert_eq!(
            shift(&base, 5).unwrap_err(),
            LagError::InvalidOffset { offset: 5, len: 5 }
        );
        assert_eq!(
            shift(&base, -7).unwrap_err(),
            LagError::InvalidOffset { offset: -7, len: 5 }
        );
        assert!(shift(&series(0), 0).is_err());
    }
}
