use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::check_operand,
    },
};

impl Evaluator {
    /// Evaluates a binary node, left operand first.
    ///
    /// Left-associative chains such as `1 + 2 + ... + n` form a spine of
    /// nodes along the `left` links. The spine is walked iteratively and
    /// folded from its leftmost leaf upward, so its length never adds to the
    /// recursion depth.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let mut pending = vec![(op, right)];
        let mut leftmost = left;
        while let Expr::BinaryOp { left, op, right } = leftmost {
            pending.push((*op, right.as_ref()));
            leftmost = left.as_ref();
        }

        let mut acc = self.eval(leftmost)?;
        for (op, right) in pending.into_iter().rev() {
            let right = self.eval(right)?;
            acc = Self::eval_binary(op, acc, right)?;
        }
        Ok(acc)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// Both operands are checked for NaN and infinity first. The operation is
    /// then routed to the arithmetic, power or bitwise handler.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the finite result.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, 3.0, 4.0);
    /// assert_eq!(result.unwrap(), 7.0);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::RightShift, 6.0, 1.0);
    /// assert_eq!(result.unwrap(), 3.0);
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
        use BinaryOperator::{
            Add, BitwiseAnd, BitwiseOr, BitwiseXor, Divide, LeftShift, Modulo, Multiply, Power,
            RightShift, Subtract,
        };

        let left = check_operand(left)?;
        let right = check_operand(right)?;

        match op {
            Add | Subtract | Multiply | Divide => Self::eval_scalar_op(op, left, right),
            Modulo => Self::eval_modulo(left, right),
            Power => Self::eval_pow(left, right),
            BitwiseAnd | BitwiseOr | BitwiseXor | LeftShift | RightShift => {
                Self::eval_bitwise_op(op, left, right)
            },
        }
    }
}
