/// Function table, domain guards and dispatch.
pub mod core;

/// Trigonometric, hyperbolic, exponential and rounding builtins.
///
/// Each is a thin wrapper over the matching `f64` method.
pub mod builtin;

/// Logarithm function implementations.
///
/// `log` and `ln` are the natural logarithm; `log10` is base ten.
pub mod log;

/// The `sqrt` (square root) function implementation.
pub mod sqrt;

/// The `factorial` function implementation.
///
/// Computes `n!` for integers `0 <= n <= 170` with an overflow check at each
/// multiplication.
pub mod factorial;
