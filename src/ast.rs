use crate::interpreter::evaluator::core::{EvalResult, Evaluator};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of node shapes. Every non-leaf node exclusively owns
/// its children through a `Box`, so a tree is finite, acyclic and can be
/// evaluated any number of times with identical results.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, including the `pi` and `e` constants.
    Number {
        /// The literal value.
        value: f64,
    },
    /// A prefix operation (e.g. `-x`, `NOT x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, shifts, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:     String,
        /// The single argument of the call.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Evaluates the tree to a finite `f64`.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 2.0 }),
    ///                             op:    BinaryOperator::Multiply,
    ///                             right: Box::new(Expr::Number { value: 21.0 }), };
    ///
    /// assert_eq!(expr.evaluate().unwrap(), 42.0);
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        Evaluator::new().eval(self)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and 64-bit integer bitwise operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Floating-point remainder (`%`)
    Modulo,
    /// Exponentiation (`^` or `**`)
    Power,
    /// Bitwise and (`AND`)
    BitwiseAnd,
    /// Bitwise or (`OR`)
    BitwiseOr,
    /// Bitwise exclusive or (`XOR`)
    BitwiseXor,
    /// Left shift (`<<`)
    LeftShift,
    /// Arithmetic right shift (`>>`)
    RightShift,
}

impl BinaryOperator {
    /// Returns the operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "^",
            Self::BitwiseAnd => "AND",
            Self::BitwiseOr => "OR",
            Self::BitwiseXor => "XOR",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
        }
    }

    /// Returns the English name of the operation, used in overflow messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Modulo => "modulo",
            Self::Power => "power",
            Self::BitwiseAnd => "bitwise and",
            Self::BitwiseOr => "bitwise or",
            Self::BitwiseXor => "bitwise xor",
            Self::LeftShift => "left shift",
            Self::RightShift => "right shift",
        }
    }

    /// Returns `true` for the operators evaluated on 64-bit integers.
    #[must_use]
    pub const fn is_bitwise(self) -> bool {
        matches!(self,
                 Self::BitwiseAnd
                 | Self::BitwiseOr
                 | Self::BitwiseXor
                 | Self::LeftShift
                 | Self::RightShift)
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
    /// Bitwise complement of the operand as an `i64` (e.g. `NOT x`).
    BitwiseNot,
}

impl UnaryOperator {
    /// Returns the operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::BitwiseNot => "NOT",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders the tree fully parenthesised, so the grouping chosen by the parser
/// is visible: `2 + 3 * 4` renders as `(2 + (3 * 4))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value } => write!(f, "{value}"),
            Self::UnaryOp { op: UnaryOperator::BitwiseNot,
                            expr, } => write!(f, "(NOT {expr})"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Box<Expr> {
        Box::new(Expr::Number { value })
    }

    #[test]
    fn display_parenthesises_every_operation() {
        let expr = Expr::BinaryOp { left:  number(2.0),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::UnaryOp { op:   UnaryOperator::Minus,
                                                                    expr: number(3.5), }), };
        assert_eq!(expr.to_string(), "(2 + (-3.5))");
    }

    #[test]
    fn display_renders_calls_and_keywords() {
        let expr = Expr::FunctionCall { name:     "sqrt".to_string(),
                                        argument: Box::new(Expr::UnaryOp { op:   UnaryOperator::BitwiseNot,
                                                                           expr: number(4.0), }), };
        assert_eq!(expr.to_string(), "sqrt((NOT 4))");
    }

    #[test]
    fn bitwise_classification() {
        assert!(BinaryOperator::LeftShift.is_bitwise());
        assert!(BinaryOperator::BitwiseXor.is_bitwise());
        assert!(!BinaryOperator::Modulo.is_bitwise());
        assert_eq!(BinaryOperator::Power.symbol(), "^");
    }
}
