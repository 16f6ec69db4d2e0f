use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Ensures an operand is a finite number.
///
/// Applied to every operand of every operator and function node before any
/// computation, so NaN and infinity never propagate silently.
///
/// # Returns
/// The operand unchanged.
///
/// # Example
/// ```
/// use reckon::{error::EvalError, interpreter::evaluator::utils::check_operand};
///
/// assert_eq!(check_operand(2.0), Ok(2.0));
/// assert_eq!(check_operand(f64::NAN),
///            Err(EvalError::InvalidOperand { reason: "NaN" }));
/// ```
pub fn check_operand(value: f64) -> EvalResult<f64> {
    if value.is_nan() {
        return Err(EvalError::InvalidOperand { reason: "NaN" });
    }
    if value.is_infinite() {
        return Err(EvalError::InvalidOperand { reason: "Infinity" });
    }
    Ok(value)
}
