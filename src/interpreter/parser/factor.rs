use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a factor, the highest-precedence expression form.
///
/// Factors include:
/// - signed and unsigned numeric literals
/// - string literals
/// - parenthesized expressions
/// - function definitions (`\(params) { body }`)
/// - function calls
/// - identifiers
///
/// This function dispatches to specialized parsing functions depending on the
/// leading token.
///
/// Grammar (simplified):
/// ```text
///     factor := "(" expression ")"
///             | function_definition
///             | function_call
///             | ("+" | "-")? NUMBER
///             | STRING
///             | identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed factor [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Minus | Token::Plus, _) => parse_signed_number(tokens),
        (Token::Number(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Backslash, _) => parse_function_definition(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_call(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a signed numeric literal.
///
/// The grammar attaches an optional `+`/`-` sign to a numeric literal rather
/// than providing a general unary minus, so a sign must be followed by
/// digits: `-3.5` is a literal, `-x` is a parse error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the sign token.
///
/// # Returns
/// An [`Expr::Literal`] with the sign folded into the value.
///
/// # Errors
/// Returns a `ParseError` if the sign is not followed by a numeric literal.
fn parse_signed_number<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (sign, line) = match tokens.next() {
        Some((Token::Minus, line)) => (-1.0, *line),
        Some((Token::Plus, line)) => (1.0, *line),
        _ => unreachable!(),
    };

    match tokens.peek() {
        Some((Token::Number(n), _)) => {
            let value = sign * *n;
            tokens.next();
            Ok(Expr::Literal { value: value.into(),
                               line })
        },
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected digits after sign, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a numeric or string literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (tok, line) = tokens.peek().unwrap();
    match tok {
        Token::Number(n) => {
            let value = LiteralValue::Number(*n);
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        Token::Str(s) => {
            let value = LiteralValue::Str(s.clone());
            let line = *line;
            tokens.next();
            Ok(Expr::Literal { value, line })
        },
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses an identifier, or a function call if `(` immediately follows.
///
/// A call consists of the callee name and a parenthesized, comma-separated,
/// possibly-empty argument list; each argument is a full expression.
///
/// Grammar:
/// ```text
///     call := identifier "(" (expression ("," expression)*)? ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// An [`Expr::FunctionCall`] when an argument list follows, otherwise an
/// [`Expr::Identifier`].
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the argument list
/// is not closed.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!(),
    };

    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    Ok(Expr::Identifier { name, line })
}

/// Parses an anonymous function definition.
///
/// Expected structure: `\(param1, param2, ...) { statements }`
///
/// The function consumes the `\`, parses the parenthesized parameter list
/// (which may be empty), requires a `{`, and then delegates to `parse_block`
/// for the body statements until the matching `}`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `\`.
///
/// # Returns
/// An [`Expr::FunctionDefinition`] holding the shared [`FunctionDef`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - `(` does not follow the `\`,
/// - parameters fail to parse,
/// - `{` does not follow the parameter list,
/// - the body is malformed or ends unexpectedly.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        _ => return Err(ParseError::InvalidFunctionDefinition { line }),
    }

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    match tokens.next() {
        Some((Token::LBrace, _)) => {},
        _ => return Err(ParseError::InvalidFunctionDefinition { line }),
    }

    let body = parse_block(tokens, line)?;

    Ok(Expr::FunctionDefinition { def: Rc::new(FunctionDef { params, body, line }),
                                  line })
}
