/// Numeric conversion helpers.
///
/// This module provides checked conversions between `f64` and the integer
/// types used by bitwise operators and `factorial`. Conversions that could
/// silently saturate or wrap return an error (or `None`) instead.
pub mod num;
