use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment (`name != expression` — the `!=` pair is the assignment
///   operator at statement level),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; assignment is recognized by a limited
/// lookahead and the first matching construct is returned. Because assignment
/// is tried first, a statement-level `a != b` always binds `a`; the not-equal
/// comparison with an identifier on the left is reachable only inside a
/// nested expression (e.g. parenthesized or as a call argument).
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { line: expr.line_number(),
                               expr })
}

/// Parses an assignment statement.
///
/// Supported form: `<identifier> != <expression>`
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `!=`, an assignment is parsed.
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::BangEqual, line)) = lookahead.peek() {
            let name = if let Some((Token::Identifier(n), _)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            let line = *line;
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses a whole program: zero or more statements, each optionally followed
/// by a `;`.
///
/// After each statement the parser requires either the end of input, a `;`,
/// or a token that can begin a new statement. Anything else — for example a
/// stray `)` or a second comparison operator — is rejected with
/// `ParseError::UnexpectedTrailingTokens` rather than silently ignored.
///
/// # Parameters
/// - `tokens`: Token iterator for the full token stream.
///
/// # Returns
/// The ordered sequence of top-level statements.
///
/// # Errors
/// Propagates any statement parse failure, and reports trailing input that
/// cannot start a statement.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);

        match tokens.peek() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((tok, line)) if !can_begin_statement(tok) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                  line:  *line, });
            },
            _ => {},
        }
    }

    Ok(statements)
}

/// Tests whether a token can appear at the start of a statement.
///
/// Used by [`parse_program`] to distinguish a new statement from trailing
/// garbage after the previous one.
const fn can_begin_statement(token: &Token) -> bool {
    matches!(token,
             Token::Identifier(_)
             | Token::Number(_)
             | Token::Str(_)
             | Token::Minus
             | Token::Plus
             | Token::LParen
             | Token::Backslash)
}
