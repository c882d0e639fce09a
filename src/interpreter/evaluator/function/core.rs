use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{block::eval_block, core::EvalResult},
        value::core::Value,
    },
};

/// Applies a callable value to a list of evaluated arguments.
///
/// For a user-defined function, a new environment frame is created whose
/// outer link is the function's **captured** environment, never the
/// caller's; that rule is what makes scoping lexical. Parameters are bound
/// positionally in the new frame, the body runs as a block, and a bubbled
/// `Value::Return` is unwrapped here, exactly once. A body that ends in a
/// `let` yields null.
///
/// Builtins are invoked with the argument list directly.
///
/// # Parameters
/// - `function`: The value in call position.
/// - `arguments`: Evaluated argument values.
///
/// # Returns
/// The call's result value.
///
/// # Errors
/// - `wrong number of arguments. got=N, want=M` when the argument count
///   does not match the parameter count.
/// - `not a function: T` when the value is not callable.
/// - Whatever the body or builtin raises.
pub fn apply_function(function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                              want: function.parameters.len(), });
            }

            let env = Environment::new_enclosed(Rc::clone(&function.env));

            for (parameter, argument) in function.parameters.iter().zip(arguments) {
                env.borrow_mut().set(parameter.clone(), argument);
            }

            match eval_block(&function.body, &env)? {
                Some(Value::Return(value)) => Ok(*value),
                Some(value) => Ok(value),
                None => Ok(Value::Null),
            }
        },

        Value::Builtin(builtin) => (builtin.func)(&arguments),

        other => Err(RuntimeError::NotAFunction { tag: other.type_tag() }),
    }
}
