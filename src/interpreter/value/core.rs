use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::BlockStatement,
    interpreter::{
        environment::EnvRef,
        evaluator::core::EvalResult,
        value::hash_key::{HashKey, fnv1a},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, function returns, and conditional evaluations. Aggregate
/// variants sit behind `Rc` so that values stay cheap to clone as they move
/// through environments and argument lists.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and logical
    /// negation (`!`). Because values are enum variants, every `true` in a
    /// program is the same value; identity and equality coincide.
    Bool(bool),
    /// An immutable string value.
    Str(Rc<str>),
    /// The absent value. Produced by an untaken `if` with no `else`, a bare
    /// `return;`, and out-of-range or missing index lookups.
    Null,
    /// A value travelling up from a `return` statement. Internal only: block
    /// evaluation forwards it untouched and the enclosing function call or
    /// program unwraps it, so user code never observes this variant.
    Return(Box<Self>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A built-in function.
    Builtin(BuiltinFunction),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash map. Each entry keeps the original key value next to the
    /// mapped value so the pair can be rendered back to the user.
    Hash(Rc<HashMap<HashKey, HashPair>>),
}

/// A user-defined function value: parameters, shared body, and the
/// environment the `fn` literal was evaluated in.
///
/// The environment reference is what makes closures work: applying the
/// function extends this captured environment, never the caller's.
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body, shared with the AST.
    pub body:       Rc<BlockStatement>,
    /// The defining environment.
    pub env:        EnvRef,
}

/// One entry of a hash value: the original key and the mapped value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written, for rendering.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and returns a
/// fresh result value or a runtime error.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A named built-in function.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunction {
    /// The name the builtin is reachable under.
    pub name: &'static str,
    /// The handler.
    pub func: BuiltinFn,
}

impl Value {
    /// Returns the uppercase type tag used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_tag(), "INTEGER");
    /// assert_eq!(Value::Null.type_tag(), "NULL");
    /// ```
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Everything is truthy except `false` and null.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Derives the hash-map key identity for this value.
    ///
    /// Only integers, booleans and strings are hashable; everything else
    /// returns `None` and the evaluator reports it as unusable.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// let a = Value::Str("name".into());
    /// let b = Value::Str("name".into());
    ///
    /// assert_eq!(a.hash_key(), b.hash_key());
    /// assert!(Value::Null.hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        #[allow(clippy::cast_sign_loss)]
        let value = match self {
            Self::Integer(n) => *n as u64,
            Self::Bool(b) => u64::from(*b),
            Self::Str(s) => fnv1a(s.as_bytes()),
            _ => return None,
        };

        Some(HashKey { tag: self.type_tag(),
                       value })
    }
}

impl PartialEq for Value {
    /// Functions compare by identity; everything else compares structurally.
    /// Comparing function values structurally would chase their captured
    /// environments, which may contain the functions themselves.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => l.name == r.name,
            (Self::Array(l), Self::Array(r)) => l == r,
            (Self::Hash(l), Self::Hash(r)) => l == r,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f, "fn({}) {{ {} }}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;

                for (index, pair) in pairs.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}: {}", pair.key, pair.value)?;
                }

                write!(f, "}}")
            },
        }
    }
}

impl std::fmt::Debug for FunctionValue {
    /// The captured environment is deliberately left out: it may hold this
    /// very function, and following it would recurse forever.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}
