use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Variants that stand for a class of lexemes (`Identifier`, `Integer`,
/// `Str`, `Illegal`) carry the exact source slice that produced them; decimal
/// decoding of integers is left to the parser so that overflow can be
/// reported as a parse error rather than a lexing failure.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`. Only decimal.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// String literal tokens. The carried text is the bytes between the
    /// quotes, exclusive. No escape sequences are processed: `"a\nb"`
    /// contains a backslash and an `n`.
    #[regex(r#""[^"]*""#, trim_quotes)]
    Str(String),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or function names such as `x` or `adder`.
    /// Letters and underscores only; digits never appear in identifiers.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Any byte the table above does not recognize. The lexer itself never
    /// fails; the parser diagnoses these.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),

    /// Line feeds bump the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding quotes from a string literal slice.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenizes a complete source string.
///
/// Each token is paired with the line it started on. End of input is
/// represented by the end of the returned sequence rather than an explicit
/// token. Bytes the token table does not cover come back as
/// [`Token::Illegal`] so that the parser can report them; lexing itself
/// cannot fail.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// The tokens of `source` in input order, each with its source line.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let five = 5;");
///
/// assert_eq!(tokens,
///            vec![(Token::Let, 1),
///                 (Token::Identifier("five".to_string()), 1),
///                 (Token::Assign, 1),
///                 (Token::Integer("5".to_string()), 1),
///                 (Token::Semicolon, 1)]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(_) => write!(f, "INT"),
            Self::Str(_) => write!(f, "STRING"),
            Self::Identifier(_) => write!(f, "IDENT"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Illegal(s) => write!(f, "ILLEGAL({s})"),
            Self::Function => write!(f, "fn"),
            Self::Let => write!(f, "let"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::Return => write!(f, "return"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bang => write!(f, "!"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
