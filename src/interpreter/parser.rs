/// Parser entry point and shared definitions.
///
/// Holds the [`core::Parser`] type, the result alias and the nesting limit,
/// and starts the descent at the lowest-precedence grammar level.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from bitwise OR down to exponentiation.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Handles `+`, `-` and `NOT` prefixes, numbers, parenthesised expressions and
/// function calls.
pub mod unary;
