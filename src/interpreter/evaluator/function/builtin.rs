use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{BuiltinFunction, Value},
    },
};

/// The builtin registry.
///
/// New builtins are added by extending this table. Identifier resolution
/// falls back to it after the environment chain, so user bindings shadow
/// builtins.
static BUILTIN_TABLE: &[BuiltinFunction] = &[BuiltinFunction { name: "len",
                                                               func: len, },
                                             BuiltinFunction { name: "rest",
                                                               func: rest, },
                                             BuiltinFunction { name: "push",
                                                               func: push, }];

/// Looks a builtin up by name.
///
/// # Example
/// ```
/// use quill::interpreter::evaluator::function::builtin::lookup_builtin;
///
/// assert!(lookup_builtin("len").is_some());
/// assert!(lookup_builtin("map").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<BuiltinFunction> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}

/// Returns the length of a string (in bytes) or an array.
///
/// # Example
/// ```
/// use quill::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// let length = len(&[Value::Str("hello".into())]).unwrap();
/// assert_eq!(length, Value::Integer(5));
/// ```
#[allow(clippy::cast_possible_wrap)]
pub fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         tag:      other.type_tag(), }),
    }
}

/// Returns a fresh array holding everything but the first element.
///
/// The input array is not touched; an empty array has no rest and yields
/// null.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use quill::interpreter::{evaluator::function::builtin::rest, value::core::Value};
///
/// let arr = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
/// let tail = rest(&[arr]).unwrap();
///
/// assert_eq!(tail, Value::Array(Rc::new(vec![Value::Integer(2)])));
/// ```
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                return Ok(Value::Null);
            }

            Ok(Value::Array(Rc::new(elements[1..].to_vec())))
        },
        other => Err(RuntimeError::ExpectedArrayArgument { function: "rest",
                                                           tag:      other.type_tag(), }),
    }
}

/// Returns a fresh array equal to the input with one value appended.
///
/// The input array is not touched; arrays are persistent by copy.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use quill::interpreter::{evaluator::function::builtin::push, value::core::Value};
///
/// let arr = Value::Array(Rc::new(vec![Value::Integer(1)]));
/// let longer = push(&[arr.clone(), Value::Integer(2)]).unwrap();
///
/// assert_eq!(longer,
///            Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)])));
/// assert_eq!(arr, Value::Array(Rc::new(vec![Value::Integer(1)])));
/// ```
pub fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    match &args[0] {
        Value::Array(elements) => {
            let mut elements = elements.as_ref().clone();
            elements.push(args[1].clone());

            Ok(Value::Array(Rc::new(elements)))
        },
        other => Err(RuntimeError::ExpectedArrayArgument { function: "push",
                                                           tag:      other.type_tag(), }),
    }
}

/// Checks that the argument list has exactly the expected length.
const fn check_arity(args: &[Value], want: usize) -> EvalResult<()> {
    if args.len() == want {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                               want })
    }
}
