use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists, and
/// function parameter lists. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token follows an item,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();

    if let Some((token, _)) = tokens.peek()
       && token == closing
    {
        tokens.next();

        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if token == closing => {
                tokens.next();
                break;
            },
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: closing.to_string(),
                                                         found:    token.to_string(),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { expected: "IDENT".to_string(),
                                              found:    token.to_string(),
                                              line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The required token.
///
/// # Returns
/// The source line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming the expected and found tokens, or an
/// end-of-input error when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((token, line)) if token == expected => Ok(*line),
        Some((token, line)) => {
            Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found:    token.to_string(),
                                              line:     *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
