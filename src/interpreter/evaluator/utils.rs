use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BlockStatement, Expr},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::{
            block::eval_block,
            core::{EvalResult, eval_expression},
            function::builtin::lookup_builtin,
        },
        value::core::{HashPair, Value},
    },
};

/// Resolves an identifier to a value.
///
/// The environment chain is consulted first, so a user binding shadows a
/// builtin of the same name. Names matching neither are reported as
/// `identifier not found`.
///
/// # Parameters
/// - `name`: The name to resolve.
/// - `env`: The innermost environment of the lookup.
pub fn eval_identifier(name: &str, env: &EnvRef) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = lookup_builtin(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a list of expressions into values, left to right.
///
/// The first failing expression abandons the rest of the list and its
/// error becomes the result; call arguments and array elements after an
/// error are never evaluated.
pub fn eval_expressions(exprs: &[Expr], env: &EnvRef) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}

/// Evaluates an `if` expression.
///
/// The condition is evaluated and checked for truthiness: anything except
/// `false` and null selects the consequence. With a falsy condition the
/// alternative block is evaluated when present, and the whole expression
/// is null otherwise. An untaken or empty branch likewise yields null.
///
/// A bubbled `Value::Return` from the chosen block passes through
/// unchanged, so `return` inside an `if` still exits the enclosing
/// function.
///
/// # Parameters
/// - `condition`: The condition expression.
/// - `consequence`: Block to evaluate when the condition is truthy.
/// - `alternative`: Optional block for the falsy case.
/// - `env`: The enclosing environment; branches do not open a new scope.
pub fn eval_if_expression(condition: &Expr,
                          consequence: &BlockStatement,
                          alternative: Option<&BlockStatement>,
                          env: &EnvRef)
                          -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    let branch = if condition.is_truthy() {
        Some(consequence)
    } else {
        alternative
    };

    match branch {
        Some(block) => Ok(eval_block(block, env)?.unwrap_or(Value::Null)),
        None => Ok(Value::Null),
    }
}

/// Evaluates an index expression on already-evaluated operands.
///
/// Arrays are indexed by integer; an index below zero or past the end is
/// null, not an error. Hashes are indexed by any hashable key; a missing
/// key is null, an unhashable key is an error. Indexing anything else
/// reports the indexed value's type.
///
/// # Parameters
/// - `left`: The value being indexed.
/// - `index`: The index value.
pub fn eval_index_expression(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            Ok(eval_array_index(elements, *position))
        },
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { tag: key.type_tag() })?;

            Ok(pairs.get(&hash_key)
                    .map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { tag: left.type_tag() }),
    }
}

/// Fetches an array element, yielding null when the index is out of range.
fn eval_array_index(elements: &[Value], position: i64) -> Value {
    usize::try_from(position).ok()
                             .and_then(|position| elements.get(position))
                             .cloned()
                             .unwrap_or(Value::Null)
}

/// Evaluates a hash literal expression.
///
/// For each pair in parse order: the key is evaluated and must be hashable
/// (integer, boolean or string), then the value is evaluated, then the
/// entry is stored under the key's hash identity. The original key value is
/// kept alongside the mapped value so the hash can be rendered back.
/// Writing the same key twice keeps the later entry.
///
/// # Parameters
/// - `pairs`: Key and value expression pairs.
/// - `env`: The enclosing environment.
pub fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &EnvRef) -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { tag: key.type_tag() })?;

        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}
