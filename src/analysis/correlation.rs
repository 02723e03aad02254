use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::config::CorrelationMethod;
use crate::config::constants::correlation::MIN_PAIRS;
use crate::errors::LagError;
use crate::models::{CorrelationResult, PairedColumns};
use crate::utils::{are_all_elements_same, average_ranks, mean, paired_finite};

/// Pearson correlation of signal against target, with its two-tailed p-value.
pub fn correlate<S>(series: &S) -> Result<CorrelationResult, LagError>
where
    S: PairedColumns + ?Sized,
{
    correlate_with(series, CorrelationMethod::Pearson)
}

/// Correlation of signal against target using `method`.
///
/// Only rows where both values are finite are used; `n` counts them.
/// A constant column gives the NaN sentinel for `r` and `p_value`, not an error.
pub fn correlate_with<S>(series: &S, method: CorrelationMethod) -> Result<CorrelationResult, LagError>
where
    S: PairedColumns + ?Sized,
{
    let (x, y) = paired_finite(series.signal(), series.target());
    let n = x.len();

    if n < MIN_PAIRS {
        return Err(LagError::InsufficientData { n });
    }

    let (x, y) = match method {
        CorrelationMethod::Pearson => (x, y),
        CorrelationMethod::Spearman => (average_ranks(&x), average_ranks(&y)),
    };

    let Some(r) = pearson(&x, &y) else {
        return Ok(CorrelationResult::undefined(series.offset(), n));
    };

    Ok(CorrelationResult {
        offset: series.offset(),
        r,
        p_value: two_tailed_p_value(r, n)?,
        n,
    })
}

/// None when either column has no variance.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if are_all_elements_same(x) || are_all_elements_same(y) {
        return None;
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}

/// t = r * sqrt((n - 2) / (1 - r^2)) against Student's t with n - 2 degrees of freedom.
fn two_tailed_p_value(r: f64, n: usize) -> Result<f64, LagError> {
    // No degrees of freedom left: two points always fit a line
    if n <= MIN_PAIRS {
        return Ok(1.0);
    }

    let df = (n - 2) as f64;
    let residual = 1.0 - r * r;
    if residual <= 0.0 {
        return Ok(0.0);
    }

    let t = r * (df / residual).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| LagError::Distribution(e.to_string()))?;

    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}
