use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the chain of scope frames that
/// name resolution walks from innermost to outermost. The last element of
/// `scope_stack` is the innermost frame; the first is the root frame that
/// lives for the whole run. One frame is pushed per function call and popped
/// when the call returns, so scoping is dynamic through the call-site chain
/// rather than lexical through captured environments.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating expressions and
/// statements. A host embedding the interpreter may pre-seed bindings in the
/// root frame with [`Context::define_local`] before running a program.
///
/// [`Context::define_local`]: Context::define_local
pub struct Context {
    /// The scope chain. Bindings are mutated by assignment and by argument
    /// binding; frames themselves are created and discarded only by calls.
    pub scope_stack: Vec<HashMap<String, Value>>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with a single empty root frame.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.scope_stack.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()], }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// identifiers, binary operations, function definitions, and function
    /// calls.
    ///
    /// Most expressions produce `Some(Value)`; a function call yields `None`
    /// when the called body never evaluates a non-assignment statement.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// calls that do not yield one.
    ///
    /// # Example
    /// ```
    /// use scrawl::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let expr = Expr::Literal { value: 10.0.into(),
    ///                            line:  1, };
    ///
    /// let v = context.eval(&expr).unwrap();
    /// assert_eq!(v, Some(Value::Number(10.0)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Self::eval_literal(value),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line),
            // A definition captures nothing; the value is the shared
            // definition itself.
            Expr::FunctionDefinition { def, .. } => Ok(Some(Value::Function(Rc::clone(def)))),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment statement performs the assignment protocol and produces
    /// no value: the right-hand side is evaluated in the current scope chain,
    /// then the nearest existing binding of the name is overwritten, or a new
    /// binding is created in the innermost frame if the name is unbound
    /// anywhere.
    ///
    /// Any other statement is evaluated as an expression and its value is
    /// returned.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements that yield a result, or `None`
    /// for assignments and value-less calls.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedAssignment` when an assignment's
    /// right-hand side produces no value, and propagates any evaluation
    /// failure.
    ///
    /// # Example
    /// ```
    /// use scrawl::{interpreter::evaluator::core::Context, parse};
    ///
    /// let statements = parse("x != 21 * 2").unwrap();
    /// let mut context = Context::new();
    ///
    /// context.eval_statement(&statements[0]).unwrap();
    /// assert_eq!(context.get_variable("x").unwrap().to_string(), "42");
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value =
                    self.eval(value)?
                        .ok_or_else(|| RuntimeError::UndefinedAssignment { name: name.clone(),
                                                                           line: *line, })?;

                self.assign_nearest(name, value);
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }
}
