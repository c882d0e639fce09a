/// Core expression parsing.
///
/// Contains the precedence ladder and the Pratt parsing loop that drives
/// prefix and infix handlers.
pub mod core;

/// Infix handlers.
///
/// Parses binary operator expressions, call expressions, and index
/// expressions, each entered with the left-hand expression already parsed.
pub mod infix;

/// Prefix handlers.
///
/// Parses everything an expression can begin with: literals, identifiers,
/// prefix operators, grouped expressions, `if` expressions, function
/// literals, and array and hash literals.
pub mod prefix;

/// Statement parsing.
///
/// Parses programs, `let` and `return` statements, expression statements,
/// and brace-delimited blocks, recovering at statement granularity so that
/// one malformed statement does not hide the rest of the program.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides shared helpers for comma-separated lists, identifiers, and
/// required tokens.
pub mod utils;
