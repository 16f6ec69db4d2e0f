use crate::interpreter::evaluator::core::EvalResult;

/// Generates a builtin that applies an `f64` method to its argument.
///
/// Domain and result checks live in the function table, so the generated
/// functions never fail on their own.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(std::f64::consts::FRAC_PI_2).unwrap();
///
/// assert_eq!(r, 1.0);
/// ```
macro_rules! real_builtin {
    ($($fname:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies `f64::", stringify!($fname), "` to the argument.")]
            pub fn $fname(x: f64) -> EvalResult<f64> {
                Ok(x.$fname())
            }
        )*
    };
}

real_builtin!(sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, exp, abs, ceil, floor, round);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round(2.5), Ok(3.0));
        assert_eq!(round(-2.5), Ok(-3.0));
        assert_eq!(round(0.49), Ok(0.0));
    }

    #[test]
    fn ceil_and_floor() {
        assert_eq!(ceil(-1.5), Ok(-1.0));
        assert_eq!(floor(-1.5), Ok(-2.0));
        assert_eq!(abs(-4.25), Ok(4.25));
    }
}
