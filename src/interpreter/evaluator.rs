/// Core evaluation logic.
///
/// Contains the expression dispatch and program evaluation, including the
/// unwrapping of bubbled `return` values at the program boundary.
pub mod core;

/// Statement evaluation.
///
/// Implements `let` bindings, `return` wrapping, and expression statements.
pub mod statement;

/// Block evaluation.
///
/// Evaluates brace-delimited statement sequences and forwards bubbled
/// `return` values to the enclosing function or program.
pub mod block;

/// Prefix operator evaluation.
///
/// Handles logical negation and numeric negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements arithmetic, comparison and equality for the operand type
/// combinations the language supports, and the fixed-shape errors for the
/// rest.
pub mod binary;

/// Function application.
///
/// Applies user-defined functions and builtins, and defines the builtin
/// registry.
pub mod function;

/// Utility evaluators.
///
/// Identifier lookup, conditionals, index expressions, and hash literals.
pub mod utils;
