use std::rc::Rc;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::{
            binary::eval_infix,
            function::core::apply_function,
            statement::eval_statement,
            unary::eval_prefix,
            utils::{
                eval_expressions, eval_hash_literal, eval_identifier, eval_if_expression,
                eval_index_expression,
            },
        },
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Errors short-circuit: the first
/// failing sub-evaluation stops the enclosing evaluation and becomes its
/// result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a complete program under the given environment.
///
/// Statements run in order. A bubbled `return` value stops execution and is
/// unwrapped here, at the outermost boundary; an error stops execution and
/// propagates. Otherwise the program's value is the value of its last
/// statement, which is `None` when that statement is a `let`.
///
/// # Parameters
/// - `program`: The parsed program. Must have parsed without errors.
/// - `env`: The environment to evaluate under; top-level `let` bindings are
///   written into it, so a REPL can pass the same environment repeatedly.
///
/// # Returns
/// The program's result value, or `None` when it does not produce one.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::lex,
///     parser::statement::parse_program,
///     value::core::Value,
/// };
///
/// let tokens = lex("let seven = 3 + 4; seven;");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// let result = eval_program(&program, &env).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(7)));
/// ```
pub fn eval_program(program: &Program, env: &EnvRef) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(value)) => return Ok(Some(*value)),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a single expression and returns the resulting value.
///
/// This is the main dispatch of the tree walker. Literals build fresh
/// values, identifiers consult the environment, operators and calls
/// evaluate their operands strictly left to right, and a function literal
/// captures the environment it is evaluated in, which is what turns it into
/// a closure.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The environment names are resolved against.
///
/// # Returns
/// The computed value. Expressions always produce one.
pub fn eval_expression(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::Str(Rc::from(value.as_str()))),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::Identifier { name, .. } => eval_identifier(name, env),
        Expr::Prefix { op, right, .. } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right, .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       Rc::clone(body),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments, .. } => {
            let function = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            apply_function(&function, arguments)
        },
        Expr::ArrayLiteral { elements, .. } => {
            Ok(Value::Array(Rc::new(eval_expressions(elements, env)?)))
        },
        Expr::Index { left, index, .. } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index_expression(&left, &index)
        },
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
    }
}
