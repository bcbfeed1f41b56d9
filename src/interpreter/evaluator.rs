/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation context, its scope stack, and the main dispatch
/// over AST node kinds.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic, string
/// concatenation, ordering, and equality.
pub mod binary;

/// Function call evaluation.
///
/// Implements the call protocol: callee resolution, arity checking, argument
/// binding, and body execution in a fresh scope frame.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides scope-chain helpers, common checks, and reusable logic used
/// during expression evaluation.
pub mod utils;
