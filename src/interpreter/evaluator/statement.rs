use crate::{
    ast::Statement,
    interpreter::{
        environment::EnvRef,
        evaluator::core::{EvalResult, eval_expression},
        value::core::Value,
    },
};

/// Evaluates a single statement.
///
/// - A `let` statement evaluates its value expression and binds the name in
///   the innermost environment. It produces no value (`None`), which the
///   REPL treats as nothing to print.
/// - A `return` statement evaluates its expression (null when absent) and
///   wraps the result in `Value::Return` so it can bubble through enclosing
///   blocks.
/// - An expression statement produces the value of its expression.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: The environment bindings are written into and read from.
///
/// # Returns
/// `Some(Value)` for statements that yield a result, or `None` when no
/// value is produced.
pub fn eval_statement(statement: &Statement, env: &EnvRef) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let value = match value {
                Some(expr) => eval_expression(expr, env)?,
                None => Value::Null,
            };
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expr, .. } => Ok(Some(eval_expression(expr, env)?)),
    }
}
