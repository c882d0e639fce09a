/// Turns source text into tokens.
///
/// Declares the `Token` enum and the lexing entry point. Tokens are paired
/// with the line they appeared on; unrecognized bytes become `Illegal`
/// tokens for the parser to diagnose instead of failing the lexer.
pub mod lexer;

/// Turns tokens into an abstract syntax tree.
///
/// A top-down operator-precedence (Pratt) parser with one token of
/// lookahead. Errors are collected into a list and parsing continues, so a
/// single pass reports every malformed statement in a program.
pub mod parser;

/// Walks the syntax tree and produces values.
///
/// Implements the semantics of the language: operator behavior, truthiness,
/// `return` bubbling through nested blocks, error propagation, function
/// application with lexical closures, and the builtin functions.
pub mod evaluator;

/// Runtime values.
///
/// The `Value` enum, its type tags and `Inspect` rendering, and the hash
/// key identities for hash-map values.
pub mod value;

/// Name bindings with lexical scope.
///
/// Environments map names to values and chain outward to enclosing frames.
/// Function values keep a reference to the environment they were created
/// in, which keeps captured frames alive after their call returns.
pub mod environment;
