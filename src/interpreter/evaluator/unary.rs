use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an already-evaluated operand.
///
/// `!` negates truthiness and is defined for every value: `!false` and
/// `!null` are `true`, everything else negates to `false`. `-` is defined
/// for integers only; negating any other type is an unknown-operator error,
/// and negating `i64::MIN` overflows.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `right`: The operand value.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use quill::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// let negated = eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap();
/// assert_eq!(negated, Value::Integer(-5));
///
/// let error = eval_prefix(PrefixOperator::Negate, &Value::Bool(true)).unwrap_err();
/// assert_eq!(error.to_string(), "unknown operator: -BOOLEAN");
/// ```
pub fn eval_prefix(op: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => value.checked_neg()
                                          .map(Value::Integer)
                                          .ok_or(RuntimeError::IntegerOverflow),
            _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                           right: right.type_tag() }),
        },
    }
}
