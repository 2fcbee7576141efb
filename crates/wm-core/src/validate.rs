use crate::{CoreError, CoreResult};

/// True iff every candidate is a finite number strictly greater than zero.
///
/// Total over any input: zero, negatives, NaN, and infinities all reject.
pub fn all_positive_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}

/// Positivity check for a single constructor input.
pub fn ensure_positive(value: f64, what: &'static str) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::NonFinite { what, value });
    }
    if value <= 0.0 {
        return Err(CoreError::NonPositive { what, value });
    }
    Ok(value)
}
