//! # quill
//!
//! quill is a tree-walking interpreter for a small, dynamically-typed,
//! C-like scripting language. The language has integers, booleans, strings,
//! arrays, hash maps, first-class functions with lexical closures,
//! `if`/`else` expressions, `return`, and `let` bindings.
//!
//! Source text flows one way through the pipeline: text is lexed into a
//! token stream, parsed into an abstract syntax tree by a Pratt parser, and
//! walked by a recursive evaluator against a chained environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    environment::Environment,
    evaluator::core::eval_program,
    lexer::lex,
    parser::statement::parse_program,
    value::core::Value,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes back to readable source-like text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code, split into the two channels the interpreter keeps
/// disjoint: parse errors, collected into a list, and runtime errors, which
/// propagate through evaluation.
///
/// # Responsibilities
/// - Defines error enums for both failure channels.
/// - Renders runtime errors in the fixed shapes user programs rely on.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for the
/// language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values, and
///   environments.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads lines of input, evaluates each one under an environment that
/// persists for the whole session, and prints results or error lists.
pub mod repl;

/// Runs a complete program and returns its final value.
///
/// The source is lexed and parsed in full; if the parser collected any
/// errors the program is not evaluated and the first error is returned.
/// Otherwise the program runs under a fresh global environment.
///
/// # Errors
/// Returns an error if parsing fails or if evaluation raises a runtime
/// error.
///
/// # Examples
/// ```
/// use quill::{interpreter::value::core::Value, run_program};
///
/// // The program's value is the value of its last statement.
/// let result = run_program("let x = 2 + 2; x;").unwrap();
/// assert_eq!(result, Some(Value::Integer(4)));
///
/// // A `let` statement produces no value.
/// let result = run_program("let x = 5;").unwrap();
/// assert_eq!(result, None);
///
/// // Example with an intentional error (unbound identifier).
/// let result = run_program("let y = x + 1;");
/// assert!(result.is_err());
/// ```
pub fn run_program(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = lex(source);
    let (program, errors) = parse_program(&mut tokens.iter().peekable());

    if let Some(error) = errors.into_iter().next() {
        return Err(Box::new(error));
    }

    let env = Environment::new();
    Ok(eval_program(&program, &env)?)
}
