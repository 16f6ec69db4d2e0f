use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// Number of bits in the integer representation used by the bitwise
/// operators.
const INTEGER_BITS: u32 = i64::BITS;

impl Evaluator {
    /// Evaluates a bitwise operator on two values.
    ///
    /// Both operands are truncated toward zero into `i64`, failing when they
    /// lie outside `[-2^63, 2^63)`. Shifts additionally require a count in
    /// `[0, 64)`; left shifts drop bits moved past bit 63 and right shifts are
    /// arithmetic. Non-bitwise operators are forwarded to
    /// [`Evaluator::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_bitwise_op(BinaryOperator::BitwiseAnd, 5.0, 3.0).unwrap(), 1.0);
    /// assert_eq!(Evaluator::eval_bitwise_op(BinaryOperator::LeftShift, 1.0, 4.0).unwrap(), 16.0);
    /// assert!(Evaluator::eval_bitwise_op(BinaryOperator::LeftShift, 1.0, 64.0).is_err());
    /// ```
    pub fn eval_bitwise_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, BitwiseAnd, BitwiseOr, BitwiseXor, Divide, LeftShift, Modulo, Multiply, Power,
            RightShift, Subtract,
        };

        let apply: fn(i64, i64) -> EvalResult<i64> = match op {
            BitwiseAnd => |a, b| Ok(a & b),
            BitwiseOr => |a, b| Ok(a | b),
            BitwiseXor => |a, b| Ok(a ^ b),
            LeftShift => |a, b| Ok(a.wrapping_shl(shift_count(b)?)),
            RightShift => |a, b| Ok(a >> shift_count(b)?),
            Add | Subtract | Multiply | Divide | Modulo | Power => {
                return Self::eval_binary(op, left, right);
            },
        };

        let symbol = op.symbol();
        let a = f64_to_i64_truncated(left, symbol)?;
        let b = f64_to_i64_truncated(right, symbol)?;

        Ok(i64_to_f64(apply(a, b)?))
    }
}

/// Validates a shift count and converts it to `u32`.
fn shift_count(count: i64) -> EvalResult<u32> {
    u32::try_from(count).ok()
                        .filter(|&n| n < INTEGER_BITS)
                        .ok_or(EvalError::InvalidShiftCount { count })
}
