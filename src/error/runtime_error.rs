use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// The rendered message of each variant has a fixed shape; user-facing
/// output and the test suite match against these strings, so the `Display`
/// impl below is part of the language's observable behavior.
pub enum RuntimeError {
    /// Operands of an infix operator had different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to an unsupported operand.
    UnknownPrefixOperator {
        /// The operator.
        op:    PrefixOperator,
        /// Type tag of the operand.
        right: &'static str,
    },
    /// An infix operator was applied to same-typed but unsupported operands.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type tag of the right operand.
        right: &'static str,
    },
    /// Lookup of a name failed in every enclosing environment.
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// Tried to call a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type tag of the value that was called.
        tag: &'static str,
    },
    /// A value that cannot be hashed was used as a hash key.
    UnusableHashKey {
        /// Type tag of the offending key.
        tag: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type tag of the indexed value.
        tag: &'static str,
    },
    /// A function or builtin was called with the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many the callee expects.
        want: usize,
    },
    /// A builtin received an argument of a type it cannot work with.
    UnsupportedArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type tag of the offending argument.
        tag:      &'static str,
    },
    /// A builtin required an array argument and got something else.
    ExpectedArrayArgument {
        /// Name of the builtin.
        function: &'static str,
        /// Type tag of the offending argument.
        tag:      &'static str,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed the 64-bit value range.
    IntegerOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            },

            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            },

            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            },

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { tag } => write!(f, "not a function: {tag}"),

            Self::UnusableHashKey { tag } => write!(f, "unusable as hash key: {tag}"),

            Self::IndexNotSupported { tag } => {
                write!(f, "index operator not supported: {tag}")
            },

            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::UnsupportedArgument { function, tag } => {
                write!(f, "argument to `{function}` not supported, got {tag}")
            },

            Self::ExpectedArrayArgument { function, tag } => {
                write!(f, "argument to `{function}` must be ARRAY, got {tag}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
