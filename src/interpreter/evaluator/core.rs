use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Divisors with a magnitude below this threshold count as zero for `/` and
/// `%`.
pub const ZERO_THRESHOLD: f64 = 1e-15;

/// Walks an expression tree and reduces it to a single finite `f64`.
///
/// The evaluator has no state: expressions have no variables, so the same
/// tree always evaluates to the same result. Every operator node checks its
/// operands for NaN and infinity before computing, so a non-finite
/// intermediate value is reported at the first operator above it.
///
/// ## Example
/// ```
/// use reckon::{interpreter::evaluator::core::Evaluator, parse};
///
/// let ast = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(Evaluator::new().eval(&ast).unwrap(), 20.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates an evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals, unary
    /// and binary operations, and function calls.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] raised anywhere in the tree.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { name, argument } => self.eval_function_call(name, argument),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, UnaryOperator};

    fn number(value: f64) -> Box<Expr> {
        Box::new(Expr::Number { value })
    }

    fn binary(left: f64, op: BinaryOperator, right: f64) -> Expr {
        Expr::BinaryOp { left: number(left),
                         op,
                         right: number(right) }
    }

    #[test]
    fn literal_evaluates_to_itself() {
        assert_eq!(Evaluator::new().eval(&Expr::Number { value: 1.5 }), Ok(1.5));
    }

    #[test]
    fn nan_operand_is_rejected_at_next_operator() {
        let expr = Expr::UnaryOp { op:   UnaryOperator::Plus,
                                   expr: number(f64::NAN), };
        assert_eq!(Evaluator::new().eval(&expr),
                   Err(EvalError::InvalidOperand { reason: "NaN" }));
    }

    #[test]
    fn infinite_operand_is_rejected() {
        let expr = binary(f64::INFINITY, BinaryOperator::Add, 1.0);
        assert_eq!(expr.evaluate().unwrap_err().to_string(),
                   "Invalid operand: Infinity");

        let call = Expr::FunctionCall { name:     "sin".to_string(),
                                        argument: number(f64::NEG_INFINITY), };
        assert_eq!(call.evaluate(), Err(EvalError::InvalidOperand { reason: "Infinity" }));
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let expr = Expr::BinaryOp { left:  Box::new(binary(10.0, BinaryOperator::Divide, 3.0)),
                                    op:    BinaryOperator::Power,
                                    right: number(0.5), };
        let first = expr.evaluate().unwrap();
        let second = expr.evaluate().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn left_operand_fails_first() {
        let expr = Expr::BinaryOp { left:  Box::new(binary(1.0, BinaryOperator::Divide, 0.0)),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::FunctionCall { name:     "nope".to_string(),
                                                                         argument: number(1.0), }), };
        assert_eq!(expr.evaluate(), Err(EvalError::DivisionByZero));
    }
}
