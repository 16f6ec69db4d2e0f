/// Core evaluation logic.
///
/// Holds the [`core::Evaluator`] type, the result alias and the dispatch over
/// node shapes.
pub mod core;

/// Unary operator evaluation.
///
/// Handles identity, negation and bitwise complement.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, exponentiation and 64-bit bitwise operators, each
/// with its numeric-safety checks.
pub mod binary;

/// Builtin function evaluation.
///
/// The static function table, its domain guards and the implementations.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides the operand check shared by every operator node.
pub mod utils;
