/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code. Parse
/// errors include syntax mistakes, unexpected tokens, and invalid literals,
/// detected before evaluation. They are collected into a list rather than
/// aborting the parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: type
/// mismatches, unknown operators, unbound identifiers, bad hash keys, and
/// arity failures. Their rendered messages have fixed shapes that user
/// programs and tests rely on.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
