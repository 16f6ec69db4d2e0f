use crate::interpreter::evaluator::core::EvalResult;

/// Computes the square root of a non-negative number.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::sqrt::sqrt;
///
/// assert_eq!(sqrt(2.25).unwrap(), 1.5);
/// ```
pub fn sqrt(x: f64) -> EvalResult<f64> {
    Ok(x.sqrt())
}
