/// Core expression parsing entry point.
///
/// Contains the `ParseResult` alias and the top of the expression grammar.
pub mod core;

/// Binary operator parsing.
///
/// Implements the layered precedence levels: comparison, additive, and
/// multiplicative expressions, plus the token-to-operator mapping.
pub mod binary;

/// Factor parsing.
///
/// Handles the highest-precedence expression forms: literals, identifiers,
/// function calls, function definitions, and parenthesized expressions.
pub mod factor;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as function bodies.
pub mod block;

/// Statement and program parsing.
///
/// Implements assignment lookahead, expression statements, and whole-program
/// parsing with trailing-input rejection.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers shared across parsing rules, such as comma-separated list
/// parsing.
pub mod utils;
