use std::iter::Peekable;

use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Precedence, parse_expression},
            statement::parse_block,
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Dispatches the leading token of an expression to its prefix handler.
///
/// This covers everything an expression can start with: literals,
/// identifiers, the prefix operators `!` and `-`, grouped expressions,
/// `if` expressions, function literals, and array and hash literals. A
/// token with no handler is reported as unable to begin an expression;
/// this is also where stray `Illegal` tokens from the lexer surface.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an expression.
///
/// # Returns
/// The parsed prefix expression, before any infix operators are applied.
pub(crate) fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Identifier(_), _) => parse_identifier_expression(tokens),
        (Token::Integer(_), _) => parse_integer_literal(tokens),
        (Token::Str(_), _) => parse_string_literal(tokens),
        (Token::Bool(_), _) => parse_boolean_literal(tokens),
        (Token::Bang | Token::Minus, _) => parse_prefix_operator(tokens),
        (Token::LParen, _) => parse_grouped(tokens),
        (Token::If, _) => parse_if(tokens),
        (Token::Function, _) => parse_function_literal(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::LBrace, _) => parse_hash_literal(tokens),
        (token, line) => Err(ParseError::NoPrefixParseFn { token: token.to_string(),
                                                           line:  *line, }),
    }
}

/// Parses an identifier reference.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        _ => unreachable!("dispatched on Identifier"),
    }
}

/// Parses an integer literal.
///
/// The token carries the raw decimal text; decoding happens here so that a
/// literal too large for a signed 64-bit value becomes a parse error
/// instead of a lexing failure.
fn parse_integer_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(literal), line)) => match literal.parse::<i64>() {
            Ok(value) => Ok(Expr::IntegerLiteral { value, line: *line }),
            Err(_) => Err(ParseError::BadIntegerLiteral { literal: literal.clone(),
                                                          line:    *line, }),
        },
        _ => unreachable!("dispatched on Integer"),
    }
}

/// Parses a string literal.
fn parse_string_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Str(value), line)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                    line:  *line, }),
        _ => unreachable!("dispatched on Str"),
    }
}

/// Parses a boolean literal.
fn parse_boolean_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Bool(value), line)) => Ok(Expr::BooleanLiteral { value: *value,
                                                                      line:  *line, }),
        _ => unreachable!("dispatched on Bool"),
    }
}

/// Parses a prefix operator expression.
///
/// The operand is parsed at `Prefix` precedence, so prefix operators are
/// right-associative and bind tighter than any binary operator: `!-a`
/// parses as `(!(-a))`.
fn parse_prefix_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (op, line) = match tokens.next() {
        Some((Token::Bang, line)) => (PrefixOperator::Not, *line),
        Some((Token::Minus, line)) => (PrefixOperator::Negate, *line),
        _ => unreachable!("dispatched on Bang or Minus"),
    };

    let right = parse_expression(tokens, Precedence::Prefix)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      line })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// The inner expression is returned as-is; grouping has no node of its own.
fn parse_grouped<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();

    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    Ok(expr)
}

/// Parses an `if` expression with an optional `else` branch.
///
/// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
///
/// # Errors
/// Returns a `ParseError` if the parentheses or braces are missing, or if
/// the condition or either block fails to parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    expect_token(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen)?;

    let block_line = expect_token(tokens, &Token::LBrace)?;
    let consequence = parse_block(tokens, block_line)?;

    let alternative = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();

        let block_line = expect_token(tokens, &Token::LBrace)?;
        Some(parse_block(tokens, block_line)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses a function literal.
///
/// Grammar: `fn := "fn" "(" (IDENT ("," IDENT)*)? ")" block`
///
/// The parameter list may be empty. The body block is stored behind an
/// `Rc` so closures created from the literal can share it.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    expect_token(tokens, &Token::LParen)?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let block_line = expect_token(tokens, &Token::LBrace)?;
    let body = parse_block(tokens, block_line)?;

    Ok(Expr::FunctionLiteral { parameters,
                               body: body.into(),
                               line })
}

/// Parses an array literal of the form `[expr, expr, ...]`.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket)?;

    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses a hash literal of the form `{key: value, ...}`.
///
/// Keys and values are arbitrary expressions; whether a key is actually
/// hashable is enforced by the evaluator, not here. Pairs keep their parse
/// order in the AST.
///
/// # Errors
/// Returns a `ParseError` if a `:` is missing after a key, if an entry is
/// followed by something other than `,` or `}`, or if the input ends before
/// the closing brace.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = *tokens.next().unwrap();

    let mut pairs = Vec::new();

    loop {
        if let Some((Token::RBrace, _)) = tokens.peek() {
            tokens.next();
            break;
        }

        let key = parse_expression(tokens, Precedence::Lowest)?;
        expect_token(tokens, &Token::Colon)?;
        let value = parse_expression(tokens, Precedence::Lowest)?;
        pairs.push((key, value));

        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) => {},
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: Token::RBrace.to_string(),
                                                         found:    token.to_string(),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Expr::HashLiteral { pairs, line })
}
