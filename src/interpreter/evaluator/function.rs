use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a function call.
    ///
    /// The call protocol, in order:
    /// 1. Resolve the callee name through the current scope chain
    ///    (`UnboundName` if no frame defines it, `NotAFunction` if the
    ///    binding holds a primitive).
    /// 2. Check arity against the declared parameter list (`TooFewArguments`
    ///    / `TooManyArguments`).
    /// 3. Evaluate the argument expressions eagerly, left to right, in the
    ///    caller's full scope chain.
    /// 4. Push one fresh frame onto the live chain and bind arguments to
    ///    parameters positionally; a later duplicate parameter name shadows
    ///    an earlier one.
    /// 5. Execute the body statements; the body's running result is the
    ///    call's result, which may be absent.
    /// 6. Pop the frame, on success and failure alike.
    ///
    /// The frame extends whatever chain is active at the call site, never a
    /// captured definition-site environment, so free names in the body
    /// resolve through the caller.
    ///
    /// # Parameters
    /// - `name`: Name of the binding holding the callee.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The call's result, or `None` when the body never evaluates a
    /// non-assignment statement.
    ///
    /// # Example
    /// ```
    /// use scrawl::{
    ///     interpreter::{evaluator::core::Context, value::Value},
    ///     parse,
    /// };
    ///
    /// let mut context = Context::new();
    /// let program = parse("f != \\(x) { x + 1 }; f(10)").unwrap();
    ///
    /// let result = context.eval_sequence(&program).unwrap();
    /// assert_eq!(result, Some(Value::Number(11.0)));
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              line: usize)
                              -> EvalResult<Option<Value>> {
        let def = match self.get_variable(name) {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(_) => {
                return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                        line });
            },
            None => {
                return Err(RuntimeError::UnboundName { name: name.to_string(),
                                                       line });
            },
        };

        check_arity(arguments, def.params.len(), line)?;

        let mut args = Vec::with_capacity(arguments.len());

        for expr in arguments {
            args.push(self.eval_child(expr, line)?);
        }

        self.push_scope();
        for (param, arg) in def.params.iter().zip(args) {
            self.define_local(param, arg);
        }

        let result = self.eval_sequence(&def.body);

        // The frame is discarded even when the body failed, so the chain is
        // intact for the caller's error reporting.
        self.pop_scope();

        result
    }
}

/// Checks the supplied argument count against the declared parameter count.
///
/// Returns `TooFewArguments` or `TooManyArguments` when the counts differ,
/// carrying both counts for the error message.
///
/// ## Example
/// ```
/// use scrawl::interpreter::evaluator::function::check_arity;
///
/// assert!(check_arity(&[1, 2], 2, 1).is_ok());
/// assert!(check_arity(&[1], 2, 1).is_err());
/// ```
pub const fn check_arity<T>(args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    let found = args.len();

    if found < expected {
        return Err(RuntimeError::TooFewArguments { expected, found, line });
    }
    if found > expected {
        return Err(RuntimeError::TooManyArguments { expected, found, line });
    }

    Ok(())
}
