#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Parse errors are collected on the side while parsing continues, so a
/// single pass can report every malformed statement in a program.
pub enum ParseError {
    /// The token cannot begin an expression.
    NoPrefixParseFn {
        /// Rendering of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required next, but something else was found.
    UnexpectedToken {
        /// Rendering of the expected token.
        expected: String,
        /// Rendering of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An integer literal does not fit in a signed 64-bit value.
    BadIntegerLiteral {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPrefixParseFn { token, line } => {
                write!(f, "Error on line {line}: no prefix parse function for {token} found")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f,
                       "Error on line {line}: expected next token to be {expected}, got {found} \
                        instead")
            },

            Self::BadIntegerLiteral { literal, line } => {
                write!(f, "Error on line {line}: could not parse {literal} as integer")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: unexpected end of input")
            },
        }
    }
}

impl std::error::Error for ParseError {}
