/// Dispatch of binary operators to their handlers.
pub mod core;

/// Addition, subtraction, multiplication, division and modulo.
pub mod scalar;

/// Exponentiation with domain and overflow checks.
pub mod power;

/// Bitwise operators evaluated on 64-bit two's-complement integers.
///
/// Operands are truncated toward zero after a range check, and the result is
/// converted back to `f64`.
pub mod bitwise;
