use crate::{
    ast::BlockStatement,
    interpreter::{
        environment::EnvRef,
        evaluator::{core::EvalResult, statement::eval_statement},
        value::core::Value,
    },
};

/// Evaluates a sequence of statements as a block.
///
/// Statements run in order and the block's value is that of its last
/// statement. When a statement produces a `Value::Return`, evaluation stops
/// and the wrapper is handed back **unopened**. That distinction carries the
/// whole `return` mechanism: an inner `if` block forwards the wrapper to the
/// next block out instead of swallowing it, and only the function call (or
/// the program itself) unwraps it, exactly once. Errors stop the block the
/// same way, through the result's error channel.
///
/// Blocks do not open a new environment: a `let` inside an `if` branch
/// binds in the enclosing function or program scope.
///
/// # Parameters
/// - `block`: The block to evaluate.
/// - `env`: The enclosing environment.
///
/// # Returns
/// The value of the last executed statement, a still-wrapped
/// `Value::Return`, or `None` for an empty block or one ending in `let`.
pub fn eval_block(block: &BlockStatement, env: &EnvRef) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        let value = eval_statement(statement, env)?;

        if matches!(value, Some(Value::Return(_))) {
            return Ok(value);
        }

        result = value;
    }

    Ok(result)
}
