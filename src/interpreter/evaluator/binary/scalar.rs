use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator, ZERO_THRESHOLD},
};

impl Evaluator {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Handles `Add`, `Subtract`, `Multiply` and `Divide`; any other operator
    /// is forwarded to [`Evaluator::eval_binary`]. A divisor whose magnitude is below [`ZERO_THRESHOLD`] is rejected, and
    /// an infinite result is reported as an overflow of the operation.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_scalar_op(BinaryOperator::Multiply, 1.5, 2.0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// assert!(Evaluator::eval_scalar_op(BinaryOperator::Divide, 1.0, 0.0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, BitwiseAnd, BitwiseOr, BitwiseXor, Divide, LeftShift, Modulo, Multiply, Power,
            RightShift, Subtract,
        };

        let result = match op {
            Add => left + right,
            Subtract => left - right,
            Multiply => left * right,
            Divide => {
                if right.abs() < ZERO_THRESHOLD {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            },
            Modulo | Power | BitwiseAnd | BitwiseOr | BitwiseXor | LeftShift | RightShift => {
                return Self::eval_binary(op, left, right);
            },
        };

        if result.is_infinite() {
            return Err(EvalError::Overflow { operation: op.name() });
        }
        Ok(result)
    }

    /// Evaluates the floating-point remainder `left % right`.
    ///
    /// The result has the sign of `left`, as C's `fmod`.
    pub fn eval_modulo(left: f64, right: f64) -> EvalResult<f64> {
        if right.abs() < ZERO_THRESHOLD {
            return Err(EvalError::ModuloByZero);
        }
        Ok(left % right)
    }
}
