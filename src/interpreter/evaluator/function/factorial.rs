use crate::{
    error::EvalError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_u32_exact,
};

/// Largest `n` whose factorial is finite in `f64`.
pub const MAX_FACTORIAL_ARGUMENT: u32 = 170;

/// Computes `n!` for a non-negative integer `n` no greater than 170.
///
/// The product is accumulated in `f64`, one factor at a time, and each step
/// is checked for overflow.
///
/// # Errors
/// - The argument is not an integer.
/// - The argument exceeds [`MAX_FACTORIAL_ARGUMENT`].
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::factorial::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert!(factorial(2.5).is_err());
/// ```
pub fn factorial(x: f64) -> EvalResult<f64> {
    if x.fract() != 0.0 {
        return Err(EvalError::Domain { function:    "factorial",
                                       requirement: "an integer", });
    }
    let n = f64_to_u32_exact(x).filter(|&n| n <= MAX_FACTORIAL_ARGUMENT)
                               .ok_or(EvalError::Domain { function:    "factorial",
                                                          requirement: "at most 170", })?;

    let mut result = 1.0_f64;
    for k in 2..=n {
        result *= f64::from(k);
        if result.is_infinite() {
            return Err(EvalError::ResultOverflow { function: "factorial" });
        }
    }
    Ok(result)
}
