use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses a comparison expression.
///
/// Handles the comparison operators `<`, `>`, `==`, and `!=`. A comparison
/// joins at most two additive expressions; chains like `a < b < c` are not
/// part of the grammar and the second `<` is left unconsumed.
///
/// The rule is: `comparison := additive (("<" | ">" | "==" | "!=") additive)?`
///
/// Note that at statement level an identifier followed by `!=` is parsed as
/// an assignment before expression parsing is ever attempted, so a top-level
/// `a != b` never reaches this rule.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` node, or the plain additive expression when no
/// comparison operator follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_additive(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_binary_operator(token)
       && is_comparison_op(op)
    {
        let line = *line;
        tokens.next();

        let right = parse_additive(tokens)?;

        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. The flat operand
/// list is folded into nested `BinaryOp` nodes left to right.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, and `%`.
///
/// The rule is: `multiplicative := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `%`, or a comparison operator).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use scrawl::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison class.
///
/// Supported categories:
/// - Strict relations: `<`, `>`
/// - Equality: `==`, `!=`
///
/// # Example
/// ```
/// use scrawl::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(!is_comparison_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
