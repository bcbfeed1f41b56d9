use std::collections::HashMap;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Many evaluation paths require the same sequence: evaluate the
    /// expression, check for `None`, and report an error when the expression
    /// yields nothing. The only value-less expression form is a call whose
    /// body never evaluates a non-assignment statement; using such a call
    /// where a value is required is reported as a type mismatch.
    ///
    /// This helper centralizes that behavior so that binary and
    /// function-call logic remain simple and consistent.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The evaluated `Value`.
    ///
    /// # Example
    /// ```
    /// use scrawl::{
    ///     ast::Expr,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let expr = Expr::Literal { value: 10.0.into(),
    ///                            line:  1, };
    ///
    /// let v = ctx.eval_child(&expr, 1).unwrap();
    /// assert_eq!(v, Value::Number(10.0));
    /// ```
    pub fn eval_child(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?.ok_or_else(|| RuntimeError::TypeMismatch {
            details: "expression produced no value where one was required".to_string(),
            line,
        })
    }

    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value` and returns it.
    /// Literals never produce errors.
    ///
    /// # Parameters
    /// - `value`: Literal to convert.
    ///
    /// # Returns
    /// `Some(Value)` wrapping the literal.
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_literal(value: &LiteralValue) -> EvalResult<Option<Value>> {
        Ok(Some(Value::from(value)))
    }

    /// Looks up an identifier in the scope chain.
    ///
    /// Resolution scans the scope stack from the innermost frame outward and
    /// returns the first binding found. If no frame defines the name, an
    /// `UnboundName` error is returned.
    ///
    /// # Parameters
    /// - `name`: Name of the binding.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The bound value, if found.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.define_local("x", Value::Number(10.0));
    ///
    /// let v = ctx.eval_identifier("x", 1).unwrap();
    /// assert_eq!(v, Some(Value::Number(10.0)));
    /// ```
    pub fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Option<Value>> {
        if let Some(value) = self.get_variable(name) {
            return Ok(Some(value.clone()));
        }
        Err(RuntimeError::UnboundName { name: name.to_owned(),
                                        line })
    }

    /// Executes a sequence of statements and returns its running result.
    ///
    /// Statements are executed in order. An assignment statement performs its
    /// binding and does not affect the running result. Any other statement is
    /// evaluated as an expression; its value — possibly absent, for a
    /// value-less call — becomes the running result, overwriting any previous
    /// one. After the last statement the running result is returned: the
    /// function's return value, or the top-level program's final value.
    ///
    /// The sequence is executed against the context's current scope chain;
    /// no frame is pushed here. Callers that need a fresh frame (function
    /// calls) push it before executing the body.
    ///
    /// # Parameters
    /// - `statements`: The statements to execute.
    ///
    /// # Returns
    /// The last expression-statement value, or `None` if no non-assignment
    /// statement ever produced one.
    ///
    /// # Example
    /// ```
    /// use scrawl::{
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     parse,
    /// };
    ///
    /// let statements = parse("x != 2; x * 3").unwrap();
    /// let mut context = Context::new();
    ///
    /// let result = context.eval_sequence(&statements).unwrap();
    /// assert_eq!(result, Some(Value::Number(6.0)));
    /// ```
    pub fn eval_sequence(&mut self, statements: &[Statement]) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            match statement {
                Statement::Assignment { .. } => {
                    self.eval_statement(statement)?;
                },
                Statement::Expression { .. } => result = self.eval_statement(statement)?,
            }
        }

        Ok(result)
    }

    /// Adds a new scope frame on top of the scope stack.
    ///
    /// This is used at the start of every function call; the matching
    /// [`pop_scope`] runs when the call returns.
    ///
    /// [`pop_scope`]: Context::pop_scope
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// let initial = context.scope_stack.len();
    ///
    /// context.push_scope();
    ///
    /// assert_eq!(context.scope_stack.len(), initial + 1);
    /// ```
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Removes the innermost scope frame.
    ///
    /// This is called when a function call returns; the frame and its
    /// bindings are discarded.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.push_scope();
    /// let before = context.scope_stack.len();
    ///
    /// context.pop_scope();
    ///
    /// assert_eq!(context.scope_stack.len(), before - 1);
    /// ```
    pub fn pop_scope(&mut self) {
        self.scope_stack.pop();
    }

    /// Retrieves a binding from the current scope chain.
    ///
    /// Lookup begins at the innermost frame and proceeds outward toward the
    /// root frame. Returns `None` if the name is not defined in any active
    /// frame.
    ///
    /// # Parameters
    /// - `name`: Name of the binding.
    ///
    /// # Returns
    /// A reference to the value if found, otherwise `None`.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Number(5.0));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        for scope in self.scope_stack.iter().rev() {
            if let Some(v) = scope.get(name) {
                return Some(v);
            }
        }
        None
    }

    /// Defines a binding in the current (innermost) frame.
    ///
    /// Inserts the binding into the topmost frame, shadowing any binding of
    /// the same name in outer frames. Used for argument binding and for
    /// pre-seeding the root frame from a host embedding.
    ///
    /// # Parameters
    /// - `name`: Name of the binding.
    /// - `value`: Value to store.
    ///
    /// # Panics
    /// Panics if no frame exists, which indicates an internal error.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("a", Value::Number(1.0));
    ///
    /// assert_eq!(context.get_variable("a"), Some(&Value::Number(1.0)));
    /// ```
    pub fn define_local(&mut self, name: &str, value: Value) {
        self.scope_stack
            .last_mut()
            .expect("at least the root frame")
            .insert(name.to_string(), value);
    }

    /// Assigns a value to the nearest frame containing the binding.
    ///
    /// Search proceeds from the innermost frame outward; the first frame that
    /// already defines the name has its binding overwritten, so an assignment
    /// inside a call can rebind a name belonging to an outer frame without
    /// creating a local shadow. If no frame defines the name, it is created
    /// in the innermost frame only.
    ///
    /// # Parameters
    /// - `name`: Name of the binding to update.
    /// - `value`: New value.
    ///
    /// # Example
    /// ```
    /// use scrawl::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("y", Value::Number(1.0));
    /// context.push_scope();
    ///
    /// context.assign_nearest("y", Value::Number(5.0));
    /// context.pop_scope();
    ///
    /// assert_eq!(context.get_variable("y"), Some(&Value::Number(5.0)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) {
        for scope in self.scope_stack.iter_mut().rev() {
            if scope.contains_key(name) {
                scope.insert(name.to_string(), value);
                return;
            }
        }
        self.scope_stack
            .last_mut()
            .expect("at least the root frame")
            .insert(name.to_string(), value);
    }
}
