use tracing::trace;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::{builtin, factorial, log, sqrt},
        utils::check_operand,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its already checked argument and returns the raw
/// result; NaN and overflow checks on that result are applied by the caller.
type BuiltinFn = fn(f64) -> EvalResult<f64>;

/// Largest argument accepted by `exp`, `ln(f64::MAX)`.
pub const MAX_EXP_ARGUMENT: f64 = 709.782_712_893_384;

/// The set of arguments a builtin accepts.
///
/// Checked before the builtin runs; a violation is reported as
/// [`EvalError::Domain`] with the requirement text.
#[derive(Clone, Copy)]
enum Domain {
    Any,
    UnitInterval,
    Positive,
    NonNegative,
    ExpSafe,
}

impl Domain {
    /// Tests whether `x` lies in the domain.
    fn contains(self, x: f64) -> bool {
        match self {
            Self::Any => true,
            Self::UnitInterval => (-1.0..=1.0).contains(&x),
            Self::Positive => x > 0.0,
            Self::NonNegative => x >= 0.0,
            Self::ExpSafe => x <= MAX_EXP_ARGUMENT,
        }
    }

    const fn requirement(self) -> &'static str {
        match self {
            Self::Any => "a number",
            Self::UnitInterval => "in [-1, 1]",
            Self::Positive => "positive",
            Self::NonNegative => "non-negative",
            Self::ExpSafe => "at most 709.78",
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the domain of its argument,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                domain: $domain:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:   &'static str,
            domain: Domain,
            func:   BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, domain: $domain, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { domain: Domain::Any,          func: builtin::sin },
    "cos"       => { domain: Domain::Any,          func: builtin::cos },
    "tan"       => { domain: Domain::Any,          func: builtin::tan },
    "asin"      => { domain: Domain::UnitInterval, func: builtin::asin },
    "acos"      => { domain: Domain::UnitInterval, func: builtin::acos },
    "atan"      => { domain: Domain::Any,          func: builtin::atan },
    "sinh"      => { domain: Domain::Any,          func: builtin::sinh },
    "cosh"      => { domain: Domain::Any,          func: builtin::cosh },
    "tanh"      => { domain: Domain::Any,          func: builtin::tanh },
    "log"       => { domain: Domain::Positive,     func: log::ln },
    "ln"        => { domain: Domain::Positive,     func: log::ln },
    "log10"     => { domain: Domain::Positive,     func: log::log10 },
    "exp"       => { domain: Domain::ExpSafe,      func: builtin::exp },
    "sqrt"      => { domain: Domain::NonNegative,  func: sqrt::sqrt },
    "abs"       => { domain: Domain::Any,          func: builtin::abs },
    "ceil"      => { domain: Domain::Any,          func: builtin::ceil },
    "floor"     => { domain: Domain::Any,          func: builtin::floor },
    "round"     => { domain: Domain::Any,          func: builtin::round },
    "factorial" => { domain: Domain::NonNegative,  func: factorial::factorial },
}

impl Evaluator {
    /// Evaluates the argument of a call node, then the call itself.
    ///
    /// The argument is evaluated before the name is looked up, so an error
    /// inside the argument wins over an unknown function name.
    pub(crate) fn eval_function_call(&self, name: &str, argument: &Expr) -> EvalResult<f64> {
        let value = self.eval(argument)?;
        Self::eval_function(name, value)
    }

    /// Evaluates a builtin function on an argument.
    ///
    /// The argument is checked for NaN and infinity, then against the
    /// function's domain. The result is rejected if it is NaN or infinite.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `argument`: Evaluated argument.
    ///
    /// # Returns
    /// The function result, or an error if lookup, a domain guard or a
    /// result check fails.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_function("sqrt", 16.0).unwrap(), 4.0);
    ///
    /// let err = Evaluator::eval_function("sqrt", -1.0).unwrap_err();
    /// assert_eq!(err.to_string(), "sqrt: argument must be non-negative");
    /// ```
    pub fn eval_function(name: &str, argument: f64) -> EvalResult<f64> {
        let argument = check_operand(argument)?;

        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            return Err(EvalError::UnknownFunction { name: name.to_string() });
        };

        trace!(function = builtin.name, argument, "calling builtin");

        if !builtin.domain.contains(argument) {
            return Err(EvalError::Domain { function:    builtin.name,
                                           requirement: builtin.domain.requirement(), });
        }

        let result = (builtin.func)(argument)?;

        if result.is_nan() {
            return Err(EvalError::NanResult { function: builtin.name });
        }
        if result.is_infinite() {
            return Err(EvalError::ResultOverflow { function: builtin.name });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn table_lists_every_builtin() {
        assert_eq!(BUILTIN_FUNCTIONS.len(), 19);
        assert!(BUILTIN_FUNCTIONS.contains(&"log10"));
        assert!(BUILTIN_FUNCTIONS.contains(&"factorial"));
    }

    #[test]
    fn unknown_function() {
        assert_eq!(Evaluator::eval_function("unknown", 5.0),
                   Err(EvalError::UnknownFunction { name: "unknown".to_string() }));
        assert_eq!(Evaluator::eval_function("SIN", 0.0).unwrap_err().to_string(),
                   "Unknown function: SIN");
    }

    #[test]
    fn inverse_trig_domain() {
        assert_eq!(Evaluator::eval_function("asin", 1.0), Ok(FRAC_PI_2));
        assert_eq!(Evaluator::eval_function("acos", 1.5).unwrap_err().to_string(),
                   "acos: argument must be in [-1, 1]");
    }

    #[test]
    fn logarithm_domain() {
        assert_eq!(Evaluator::eval_function("log", 0.0).unwrap_err().to_string(),
                   "log: argument must be positive");
        assert_eq!(Evaluator::eval_function("ln", -1.0),
                   Err(EvalError::Domain { function:    "ln",
                                           requirement: "positive", }));
        assert!((Evaluator::eval_function("log10", 1000.0).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn exp_guard() {
        assert!(Evaluator::eval_function("exp", 709.0).is_ok());
        assert_eq!(Evaluator::eval_function("exp", 710.0).unwrap_err().to_string(),
                   "exp: argument must be at most 709.78");
    }

    #[test]
    fn overflowing_result_is_rejected() {
        assert_eq!(Evaluator::eval_function("cosh", 1000.0),
                   Err(EvalError::ResultOverflow { function: "cosh" }));
    }

    #[test]
    fn sin_of_pi_is_near_zero() {
        assert!(Evaluator::eval_function("sin", PI).unwrap().abs() < 1e-15);
    }

    #[test]
    fn non_finite_argument_is_rejected() {
        assert_eq!(Evaluator::eval_function("abs", f64::NAN),
                   Err(EvalError::InvalidOperand { reason: "NaN" }));
    }
}
