use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// `2^63` as an `f64`; the smallest magnitude that does not fit in an `i64`
/// on the positive side.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `f64` to `i64` by truncating toward zero, for bitwise
/// operators.
///
/// The value must be finite and lie in `[-2^63, 2^63)`. The fractional part is
/// discarded, matching a C-style cast.
///
/// ## Errors
/// Returns [`EvalError::IntegerRange`] naming `operator` when the value is
/// not finite or does not fit.
///
/// ## Example
/// ```
/// use reckon::{error::EvalError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(-7.9, "AND").unwrap(), -7);
///
/// let err = f64_to_i64_truncated(1e19, "AND").unwrap_err();
/// assert_eq!(err, EvalError::IntegerRange { operator: "AND" });
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated(value: f64, operator: &'static str) -> EvalResult<i64> {
    if !value.is_finite() || value >= I64_BOUND || value < -I64_BOUND {
        return Err(EvalError::IntegerRange { operator });
    }
    Ok(value as i64)
}

/// Converts an `i64` bit pattern back to the nearest `f64`.
///
/// Values beyond `2^53` in magnitude round to the nearest representable
/// double.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `u32` if and only if it is a non-negative integer in
/// range.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_u32_exact;
///
/// assert_eq!(f64_to_u32_exact(170.0), Some(170));
/// assert_eq!(f64_to_u32_exact(2.5), None);
/// assert_eq!(f64_to_u32_exact(-1.0), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u32_exact(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) || value.fract() != 0.0 {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(f64_to_i64_truncated(3.99, "NOT"), Ok(3));
        assert_eq!(f64_to_i64_truncated(-3.99, "NOT"), Ok(-3));
    }

    #[test]
    fn accepts_exact_int64_bounds() {
        assert_eq!(f64_to_i64_truncated(-I64_BOUND, "<<"), Ok(i64::MIN));
        assert!(f64_to_i64_truncated(I64_BOUND, "<<").is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(f64_to_i64_truncated(f64::NAN, "OR"),
                   Err(EvalError::IntegerRange { operator: "OR" }));
        assert!(f64_to_i64_truncated(f64::NEG_INFINITY, "OR").is_err());
    }

    #[test]
    fn i64_round_trips_small_values() {
        assert_eq!(i64_to_f64(-42), -42.0);
        assert_eq!(i64_to_f64(i64::MIN), -I64_BOUND);
    }
}
