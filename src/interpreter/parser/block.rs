use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a brace-delimited statement sequence.
///
/// A block consists of zero or more statements, each optionally followed by a
/// `;`. Parsing continues until a closing `}` token is encountered. Blocks
/// appear only as function bodies in this grammar.
///
/// Grammar: `block := (statement ";"?)* "}"`
///
/// The opening `{` must already have been consumed by the caller.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace, used when the closing brace is
///   missing.
///
/// # Returns
/// The statements of the block, in order.
///
/// # Errors
/// Returns `ParseError::ExpectedClosingBrace` when the input ends before the
/// matching `}`, or propagates any statement parse failure.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => {
                statements.push(parse_statement(tokens)?);

                if let Some((Token::Semicolon, _)) = tokens.peek() {
                    tokens.next();
                }
            },
            None => return Err(ParseError::ExpectedClosingBrace { line }),
        }
    }

    Ok(statements)
}
