use std::rc::Rc;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and identifiers to
/// function literals, calls, conditionals, arrays, hashes, and index
/// operations. Each variant models a distinct syntactic construct and carries
/// the source line of the token that introduced it for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The decoded value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. Holds the raw bytes between the quotes.
    StringLiteral {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation (e.g. `!ok` or `-x`).
    Prefix {
        /// The prefix operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation (arithmetic or comparison).
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Function literal expression (e.g. `fn(x, y) { x + y }`).
    ///
    /// The body lives behind an `Rc` so that every closure created from this
    /// literal shares it instead of cloning the subtree.
    FunctionLiteral {
        /// Parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       Rc<BlockStatement>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Call expression (e.g. `adder(1, 2)`). The callee is an arbitrary
    /// expression, so `fn(x) { x }(5)` calls a literal directly.
    Call {
        /// Expression producing the function to call.
        function:  Box<Self>,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Index expression (e.g. `arr[2]` or `table["key"]`).
    Index {
        /// The expression being indexed.
        left:  Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Hash literal expression. Pairs are kept in parse order; the evaluator
    /// enforces that keys are hashable.
    HashLiteral {
        /// Key and value expression pairs.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units a program or block is made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement. A bare `return;` carries no expression and
    /// yields null.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// A brace-delimited sequence of statements, as found in `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number in the source code.
    pub line:       usize,
}

/// A complete parsed program: the ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (e.g. `!ok`).
    Not,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// Represents an infix operator.
///
/// Infix operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::ArrayLiteral { elements, .. } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs, .. } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}: {value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value), .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements
                             .iter()
                             .map(ToString::to_string)
                             .collect::<Vec<_>>()
                             .join(" ");
        write!(f, "{statements}")
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements
                             .iter()
                             .map(ToString::to_string)
                             .collect::<Vec<_>>()
                             .join(" ");
        write!(f, "{statements}")
    }
}
