use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Fails when zero is raised to a negative power, when a negative base is
    /// raised to a non-integer exponent, and when the result is NaN or
    /// infinite.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_pow(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(Evaluator::eval_pow(-8.0, 3.0).unwrap(), -512.0);
    /// assert!(Evaluator::eval_pow(-8.0, 0.5).is_err());
    /// ```
    pub fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(EvalError::ZeroToNegativePower);
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(EvalError::NegativeBaseFractionalExponent);
        }

        let result = base.powf(exponent);

        if result.is_nan() {
            return Err(EvalError::PowerNaN);
        }
        if result.is_infinite() {
            return Err(EvalError::Overflow { operation: "power" });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_base_rules() {
        assert_eq!(Evaluator::eval_pow(0.0, -1.0), Err(EvalError::ZeroToNegativePower));
        assert_eq!(Evaluator::eval_pow(0.0, 0.0), Ok(1.0));
        assert_eq!(Evaluator::eval_pow(0.0, 3.0), Ok(0.0));
    }

    #[test]
    fn negative_base_requires_integer_exponent() {
        assert_eq!(Evaluator::eval_pow(-2.0, 2.5),
                   Err(EvalError::NegativeBaseFractionalExponent));
        assert_eq!(Evaluator::eval_pow(-2.0, -2.0), Ok(0.25));
    }

    #[test]
    fn overflow_is_reported() {
        let err = Evaluator::eval_pow(10.0, 400.0).unwrap_err();
        assert_eq!(err.to_string(), "Overflow in power");
    }

    #[test]
    fn fractional_exponents() {
        assert_eq!(Evaluator::eval_pow(9.0, 0.5), Ok(3.0));
        assert_eq!(Evaluator::eval_pow(4.0, -0.5), Ok(0.5));
    }
}
