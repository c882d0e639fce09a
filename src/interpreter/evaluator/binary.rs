use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an infix operator to two already-evaluated operands.
///
/// Integer pairs support the four arithmetic operators and the four
/// comparisons; string pairs support only concatenation with `+`; boolean
/// pairs support only `==` and `!=`. Operands of different types are a
/// type mismatch, and same-typed operands outside the cases above are an
/// unknown operator. Both render with the operand type tags, e.g.
/// `type mismatch: INTEGER + BOOLEAN`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand value.
/// - `right`: Right operand value.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use quill::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::eval_infix, value::core::Value},
/// };
///
/// let sum = eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Integer(3)).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let error =
///     eval_infix(InfixOperator::Add, &Value::Integer(2), &Value::Bool(true)).unwrap_err();
/// assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(op, l, r),
        (Value::Bool(l), Value::Bool(r)) => eval_boolean_infix(op, *l, *r),
        _ if left.type_tag() != right.type_tag() => {
            Err(RuntimeError::TypeMismatch { left: left.type_tag(),
                                             op,
                                             right: right.type_tag() })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left: left.type_tag(),
                                                      op,
                                                      right: right.type_tag() }),
    }
}

/// Evaluates an infix operator on two integers.
///
/// Division truncates toward zero. Division by zero and any overflow of the
/// 64-bit range are runtime errors rather than wraps or panics.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match op {
        InfixOperator::Add => left.checked_add(right),
        InfixOperator::Sub => left.checked_sub(right),
        InfixOperator::Mul => left.checked_mul(right),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
        InfixOperator::Less => return Ok(Value::Bool(left < right)),
        InfixOperator::Greater => return Ok(Value::Bool(left > right)),
        InfixOperator::Equal => return Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => return Ok(Value::Bool(left != right)),
    };

    value.map(Value::Integer)
         .ok_or(RuntimeError::IntegerOverflow)
}

/// Evaluates an infix operator on two strings. Only concatenation is legal.
fn eval_string_infix(op: InfixOperator, left: &Rc<str>, right: &Rc<str>) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => Ok(Value::Str(format!("{left}{right}").into())),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                      op,
                                                      right: "STRING" }),
    }
}

/// Evaluates an infix operator on two booleans. Only equality and
/// inequality are legal; there is exactly one `true` and one `false`, so
/// value equality is identity.
fn eval_boolean_infix(op: InfixOperator, left: bool, right: bool) -> EvalResult<Value> {
    match op {
        InfixOperator::Equal => Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left: "BOOLEAN",
                                                      op,
                                                      right: "BOOLEAN" }),
    }
}
