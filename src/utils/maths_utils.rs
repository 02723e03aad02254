use itertools::Itertools;
use std::cmp::Ordering;
use std::f64;

/// Arithmetic mean. NaN for an empty slice.
#[inline]
pub(crate) fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Mean over the finite values only. None if nothing finite was seen.
pub(crate) fn mean_of_finite<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Fractional change from the previous value: (current - previous) / previous.
/// The first element (and any element following a non-positive value) is NaN.
pub(crate) fn pct_change(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(values.len());
    out.push(f64::NAN);
    out.extend(values.iter().tuple_windows().map(|(&prev, &current)| {
        if prev > f64::EPSILON {
            (current - prev) / prev
        } else {
            f64::NAN
        }
    }));
    out
}

/// +1.0 / -1.0 / 0.0 by sign. NaN stays NaN.
#[inline]
pub(crate) fn sign(val: f64) -> f64 {
    if val.is_nan() {
        f64::NAN
    } else if val > 0.0 {
        1.0
    } else if val < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// 1-based ranks, ties get the average of the ranks they span.
/// Input must be free of NaN.
pub(crate) fn average_ranks(values: &[f64]) -> Vec<f64> {
    let order: Vec<usize> = (0..values.len())
        .sorted_by(|&a, &b| {
            values[a]
                .partial_cmp(&values[b])
                .unwrap_or(Ordering::Equal)
        })
        .collect();

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        // Positions start..end (0-based) share ranks start+1..=end
        let shared = (start + 1 + end) as f64 / 2.0;
        for &idx in &order[start..end] {
            ranks[idx] = shared;
        }
        start = end;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_mean_of_finite_skips_nan() {
        let m = mean_of_finite(vec![0.5, f64::NAN, 0.1]).unwrap();
        assert!((m - 0.3).abs() < 1e-12);
        assert!(mean_of_finite(vec![f64::NAN]).is_none());
        assert!(mean_of_finite(Vec::new()).is_none());
    }

    #[test]
    fn test_pct_change() {
        let changes = pct_change(&[100.0, 110.0, 99.0, 0.0, 5.0]);
        assert_eq!(changes.len(), 5);
        assert!(changes[0].is_nan());
        assert!((changes[1] - 0.10).abs() < 1e-12);
        assert!((changes[2] + 0.10).abs() < 1e-12);
        assert!((changes[3] + 1.0).abs() < 1e-12);
        assert!(changes[4].is_nan()); // previous close was zero
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.2), 1.0);
        assert_eq!(sign(-0.01), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_average_ranks_with_ties() {
        let ranks = average_ranks(&[10.0, 20.0, 20.0, 5.0]);
        assert_eq!(ranks, vec![2.0, 3.5, 3.5, 1.0]);
    }
}
