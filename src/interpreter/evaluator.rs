/// Binary operator evaluation logic.
///
/// Handles arithmetic with its division-by-zero checks and the comparison
/// operators, which yield `1` or `0`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context holding the top-level scope, statement
/// execution, and expression dispatch.
pub mod core;

/// Function evaluation.
///
/// Turns `fn` statements into closures and applies closures to arguments,
/// checking that the callee exists and that the argument count matches.
pub mod function;
