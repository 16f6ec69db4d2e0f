use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::check_operand,
    },
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

impl Evaluator {
    /// Evaluates the operand of a unary node, then applies the operator.
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, value)
    }

    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Minus`: negation.
    /// - `BitwiseNot`: truncates to `i64` (range-checked) and complements.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Minus, 5.0).unwrap(), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::BitwiseNot, 0.0).unwrap(), -1.0);
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: f64) -> EvalResult<f64> {
        let value = check_operand(value)?;

        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Minus => Ok(-value),
            UnaryOperator::BitwiseNot => {
                let bits = f64_to_i64_truncated(value, op.symbol())?;
                Ok(i64_to_f64(!bits))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn complement_matches_twos_complement() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::BitwiseNot, 5.0), Ok(-6.0));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::BitwiseNot, -1.0), Ok(0.0));
        assert_eq!(Evaluator::eval_unary(UnaryOperator::BitwiseNot, 2.9), Ok(-3.0));
    }

    #[test]
    fn complement_rejects_out_of_range() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::BitwiseNot, 1e300),
                   Err(EvalError::IntegerRange { operator: "NOT" }));
    }

    #[test]
    fn plus_is_identity() {
        assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -0.25), Ok(-0.25));
    }
}
