use crate::interpreter::evaluator::core::EvalResult;

/// Computes the natural logarithm.
///
/// Both `ln` and `log` dispatch here.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::log::ln;
///
/// assert_eq!(ln(1.0).unwrap(), 0.0);
/// ```
pub fn ln(x: f64) -> EvalResult<f64> {
    Ok(x.ln())
}

/// Computes the base-10 logarithm.
pub fn log10(x: f64) -> EvalResult<f64> {
    Ok(x.log10())
}
