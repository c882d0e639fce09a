use std::iter::Peekable;

use crate::{
    ast::{BlockStatement, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a complete program, collecting errors instead of stopping.
///
/// Statements are parsed until the token stream is exhausted. When a
/// statement fails to parse, its error is recorded, the stream is skipped
/// ahead to the next likely statement boundary, and parsing resumes; a
/// malformed statement therefore never hides the well-formed statements
/// after it. A program that produced any errors must not be evaluated.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed program together with every parse error encountered.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::lex, parser::statement::parse_program};
///
/// let tokens = lex("let answer = 6 * 7; answer;");
/// let (program, errors) = parse_program(&mut tokens.iter().peekable());
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> (Program, Vec<ParseError>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut program = Program::default();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_statement(tokens) {
            Ok(statement) => program.statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    (program, errors)
}

/// Parses a single statement.
///
/// A statement is one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// The trailing `;` is optional after every statement form.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens),
        Some((Token::Return, _)) => parse_return_statement(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses a `let` statement: `let IDENT = expression ;?`
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign)?;

    let value = parse_expression(tokens, Precedence::Lowest)?;
    skip_optional_semicolon(tokens);

    Ok(Statement::Let { name, value, line })
}

/// Parses a `return` statement: `return expression? ;?`
///
/// A bare `return` directly followed by `;`, `}` or the end of input
/// carries no expression and evaluates to null.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let value = match tokens.peek() {
        None | Some((Token::RBrace, _)) => None,
        Some((Token::Semicolon, _)) => {
            tokens.next();
            None
        },
        Some(_) => {
            let value = parse_expression(tokens, Precedence::Lowest)?;
            skip_optional_semicolon(tokens);
            Some(value)
        },
    };

    Ok(Statement::Return { value, line })
}

/// Parses an expression statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);

    let expr = parse_expression(tokens, Precedence::Lowest)?;
    skip_optional_semicolon(tokens);

    Ok(Statement::Expression { expr, line })
}

/// Parses the statements of a block, the opening `{` already consumed.
///
/// Statements accumulate until the matching `}`. Unlike the top level, an
/// error inside a block aborts the whole block; recovery happens at
/// statement granularity in [`parse_program`] only.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `{`.
/// - `line`: Source line of the opening brace, for diagnostics.
///
/// # Errors
/// Returns a `ParseError` if a statement fails or the input ends before
/// the closing brace.
pub(crate) fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                                 line: usize)
                                 -> ParseResult<BlockStatement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(BlockStatement { statements, line })
}

/// Consumes a trailing `;` when present.
fn skip_optional_semicolon<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Skips ahead to the next plausible statement start after a parse error.
///
/// Tokens are consumed until a `;` has been eaten or the next token is a
/// statement keyword. At least one token is always consumed, so recovery
/// makes progress even when the error token itself is the problem.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((token, _)) = tokens.next() {
        if matches!(token, Token::Semicolon) {
            return;
        }

        if let Some((Token::Let | Token::Return, _)) = tokens.peek() {
            return;
        }
    }
}
