use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression, token_precedence},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that are not binary operators; `(` and `[`
/// have infix roles of their own (call and index) and are not covered here.
///
/// # Example
/// ```
/// use quill::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(token_to_infix_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// Parses a binary operator expression, `left` already parsed.
///
/// The right operand is parsed at the operator's own precedence, which
/// makes every binary operator left-associative: `a - b - c` parses as
/// `((a - b) - c)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
/// - `left`: The left operand.
///
/// # Returns
/// An `Expr::Infix` node combining both operands.
pub(crate) fn parse_infix_operator<'a, I>(tokens: &mut Peekable<I>,
                                          left: Expr)
                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = match tokens.next() {
        Some((token, line)) => (token, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let op = match token_to_infix_operator(token) {
        Some(op) => op,
        None => {
            return Err(ParseError::UnexpectedToken { expected: "an infix operator".to_string(),
                                                     found:    token.to_string(),
                                                     line, });
        },
    };

    let right = parse_expression(tokens, token_precedence(token))?;

    Ok(Expr::Infix { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line })
}

/// Parses a call expression, the callee already parsed.
///
/// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
/// - `function`: The expression producing the value to call.
///
/// # Returns
/// An `Expr::Call` node with the parsed argument list.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>, function: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen)?;

    Ok(Expr::Call { function: Box::new(function),
                    arguments,
                    line })
}

/// Parses an index expression, the indexed value already parsed.
///
/// Grammar: `index := expression "[" expression "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
/// - `left`: The expression being indexed.
///
/// # Returns
/// An `Expr::Index` node.
pub(crate) fn parse_index<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket)?;

    Ok(Expr::Index { left: Box::new(left),
                     index: Box::new(index),
                     line })
}
