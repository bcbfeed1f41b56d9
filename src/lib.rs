//! # scrawl
//!
//! scrawl is a small, dynamically-typed expression language interpreter
//! written in Rust. A recursive-descent parser turns source text into an
//! abstract syntax tree, and a tree-walking evaluator executes that tree
//! against a chain of name-to-value scope frames. Functions are first-class,
//! anonymous, and dynamically scoped through the call-site chain.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        parser::statement::parse_program,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Pretty-prints nodes back to parseable source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including the names and operators involved and
/// source line numbers for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation. It exposes the
/// public API for interpreting and executing expressions or programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a full program into its statement sequence.
///
/// The source is tokenized and then parsed as zero or more statements, each
/// optionally followed by `;` and/or a line comment. Trailing input that
/// cannot begin a statement is rejected rather than silently ignored.
///
/// # Errors
/// Returns a [`ParseError`] describing the first malformed token, unmatched
/// delimiter, unexpected end of input, or trailing input.
///
/// # Examples
/// ```
/// use scrawl::parse;
///
/// let statements = parse("x != 1; x + 2").unwrap();
/// assert_eq!(statements.len(), 2);
///
/// // An unmatched parenthesis is a parse error.
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}

/// Parses and executes a full program, returning its final value.
///
/// A fresh context with a single root scope frame is created, the program is
/// parsed in full, and its statements are executed in order. The returned
/// value is the program's running result: the value of the last
/// non-assignment statement, or `None` if no such statement produced one.
/// With `auto_print` set, the final value (when present) is printed to
/// standard output ("pipe mode").
///
/// Hosts that want to pre-seed bindings or reuse state across runs should
/// instead create a [`Context`], seed it via
/// [`Context::define_local`](interpreter::evaluator::core::Context::define_local),
/// and call
/// [`Context::eval_sequence`](interpreter::evaluator::core::Context::eval_sequence)
/// on the output of [`parse`].
///
/// # Errors
/// Returns an error if parsing or evaluation fails; the boxed error is either
/// a [`ParseError`] or a [`RuntimeError`](error::RuntimeError).
///
/// # Examples
/// ```
/// use scrawl::{get_result, interpreter::value::Value};
///
/// // The `!=` pair is the assignment operator at statement level.
/// let source = "a != 1; b != a + 1; b";
/// let result = get_result(source, false).unwrap();
/// assert_eq!(result, Some(Value::Number(2.0)));
///
/// // Example with an intentional error (unbound name).
/// let source = "y != x + 1"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str,
                  auto_print: bool)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let statements = parse(source)?;

    let mut context = Context::new();
    let result = context.eval_sequence(&statements)?;

    if auto_print && let Some(v) = &result {
        println!("{v}");
    }

    Ok(result)
}
