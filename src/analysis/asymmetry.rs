use crate::errors::LagError;
use crate::models::{LeadLagBias, LeadLagProfile};
use crate::utils::mean_of_finite;

/// mean(r for k < 0) - mean(r for k > 0).
///
/// With the shift semantics of [`shift`](crate::analysis::shift), positive
/// offsets pair past signal values with the current target. A signal that
/// moves first therefore correlates best at k > 0 and gives a negative value;
/// a signal that reacts to the target gives a positive one. See
/// [`LeadLagBias::from_indicator`]. Offsets missing from the profile, and
/// entries with an undefined `r`, are left out of their side's mean.
pub fn indicator(profile: &LeadLagProfile) -> Result<f64, LagError> {
    let lag_rs: Vec<f64> = profile.lag_side().map(|res| res.r).collect();
    let lead_rs: Vec<f64> = profile.lead_side().map(|res| res.r).collect();

    match (mean_of_finite(lag_rs.iter().copied()), mean_of_finite(lead_rs.iter().copied())) {
        (Some(lag_mean), Some(lead_mean)) => Ok(lag_mean - lead_mean),
        _ => Err(LagError::DegenerateProfile {
            negative: lag_rs.iter().filter(|r| r.is_finite()).count(),
            positive: lead_rs.iter().filter(|r| r.is_finite()).count(),
        }),
    }
}

/// The indicator read as a direction.
pub fn bias(profile: &LeadLagProfile) -> Result<LeadLagBias, LagError> {
    indicator(profile).map(LeadLagBias::from_indicator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scan_lead_lag;
    use crate::config::CorrelationMethod;
    use crate::models::{CorrelationResult, TimeSeries};
    use chrono::NaiveDate;

    fn res(offset: i32, r: f64) -> CorrelationResult {
        CorrelationResult {
            offset,
            r,
            p_value: 0.5,
            n: 30,
        }
    }

    fn profile(results: Vec<CorrelationResult>) -> LeadLagProfile {
        LeadLagProfile::from_results("GME", CorrelationMethod::Pearson, results)
    }

    #[test]
    fn test_indicator_value() {
        let p = profile(vec![
            res(-2, 0.1),
            res(-1, 0.3),
            res(0, 0.9),
            res(1, 0.6),
            res(2, 0.4),
        ]);
        // (0.2) - (0.5)
        assert!((indicator(&p).unwrap() + 0.3).abs() < 1e-12);
        // Stronger at k > 0: past discussion lines up with today's market
        assert_eq!(bias(&p).unwrap(), LeadLagBias::Leads);
    }

    #[test]
    fn test_indicator_antisymmetric_under_reflection() {
        let original = profile(vec![
            res(-3, 0.05),
            res(-2, -0.2),
            res(-1, 0.35),
            res(0, 0.5),
            res(1, 0.15),
            res(2, 0.7),
        ]);
        let mirrored = profile(original.iter().map(|r| res(-r.offset, r.r)).collect());

        let a = indicator(&original).unwrap();
        let b = indicator(&mirrored).unwrap();
        assert!(a.abs() > 1e-6);
        assert!((a + b).abs() < 1e-12);
    }

    #[test]
    fn test_missing_and_undefined_entries_excluded() {
        let p = profile(vec![
            res(-2, 0.4),
            CorrelationResult::undefined(-1, 30),
            res(0, 0.0),
            res(3, 0.1),
        ]);
        assert!((indicator(&p).unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_profile() {
        let one_sided = profile(vec![res(0, 0.5), res(1, 0.2), res(2, 0.1)]);
        assert_eq!(
            indicator(&one_sided).unwrap_err(),
            LagError::DegenerateProfile {
                negative: 0,
                positive: 2
            }
        );

        let undefined_side = profile(vec![CorrelationResult::undefined(-1, 9), res(0, 0.5), res(1, 0.2)]);
        assert!(matches!(
            indicator(&undefined_side),
            Err(LagError::DegenerateProfile { negative: 0, positive: 1 })
        ));
    }

    #[test]
    fn test_sign_convention_for_lagging_signal() {
        // signal[t] = target[t - 1]: discussion reacts a day after the market
        let start = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
        let n = 60;
        let target: Vec<f64> = (0..n).map(|i| ((i * 104_729) % 19) as f64).collect();
        let signal: Vec<f64> = (0..n)
            .map(|i| if i >= 1 { target[i - 1] } else { 0.0 })
            .collect();
        let dates = (0..n)
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        let base = TimeSeries::new("GME", dates, signal, target).unwrap();

        let scan = scan_lead_lag(&base, &[-3, -2, -1, 0, 1, 2, 3]).unwrap();
        assert!((scan.profile.get(-1).unwrap().r - 1.0).abs() < 1e-9);
        assert!(indicator(&scan.profile).unwrap() > 0.0);
        assert_eq!(bias(&scan.profile).unwrap(), LeadLagBias::Lags);
    }

    #[test]
    fn test_sign_convention_for_leading_signal() {
        // target[t] = signal[t - 2]: discussion moves two days before the market
        let start = NaiveDate::from_ymd_opt(2021, 1, 4).unwrap();
        let n = 60;
        let signal: Vec<f64> = (0..n).map(|i| ((i * 7919) % 23) as f64).collect();
        let target: Vec<f64> = (0..n)
            .map(|i| if i >= 2 { signal[i - 2] } else { 0.0 })
            .collect();
        let dates = (0..n)
            .map(|i| start + chrono::Duration::days(i as i64))
            .collect();
        let base = TimeSeries::new("GME", dates, signal, target).unwrap();

        let scan = scan_lead_lag(&base, &[-3, -2, -1, 0, 1, 2, 3]).unwrap();
        assert!((scan.profile.get(2).unwrap().r - 1.0).abs() < 1e-9);

        assert!(indicator(&scan.profile).unwrap() < 0.0);
        assert_eq!(bias(&scan.profile).unwrap(), LeadLagBias::Leads);
    }
}
