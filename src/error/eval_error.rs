use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operand was NaN or infinite.
    #[error("Invalid operand: {reason}")]
    InvalidOperand {
        /// `"NaN"` or `"Infinity"`.
        reason: &'static str,
    },
    /// The divisor of `/` was zero or too close to zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The divisor of `%` was zero or too close to zero.
    #[error("Modulo by zero")]
    ModuloByZero,
    /// An arithmetic operation produced an infinite result.
    #[error("Overflow in {operation}")]
    Overflow {
        /// Name of the operation, e.g. `"multiplication"`.
        operation: &'static str,
    },
    /// Zero raised to a negative exponent.
    #[error("Division by zero in power")]
    ZeroToNegativePower,
    /// A negative base raised to a non-integer exponent.
    #[error("Negative base with non-integer exponent")]
    NegativeBaseFractionalExponent,
    /// Exponentiation produced NaN.
    #[error("Power result is NaN")]
    PowerNaN,
    /// A bitwise operand does not fit in an `i64`.
    #[error("Operand out of int64 range for {operator}")]
    IntegerRange {
        /// The operator symbol, e.g. `"AND"`.
        operator: &'static str,
    },
    /// A shift count outside `[0, 64)`.
    #[error("Invalid shift count: {count}")]
    InvalidShiftCount {
        /// The requested shift count.
        count: i64,
    },
    /// Called a function that is not in the builtin table.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A builtin function received an argument outside its domain.
    #[error("{function}: argument must be {requirement}")]
    Domain {
        /// The name of the function.
        function:    &'static str,
        /// The violated requirement, e.g. `"positive"`.
        requirement: &'static str,
    },
    /// A builtin function produced NaN.
    #[error("{function}: result is NaN")]
    NanResult {
        /// The name of the function.
        function: &'static str,
    },
    /// A builtin function produced an infinite result.
    #[error("{function}: result overflow")]
    ResultOverflow {
        /// The name of the function.
        function: &'static str,
    },
}
