use ordered_float::OrderedFloat;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Maps an equality operator and a boolean equality result to the final
/// boolean value.
///
/// Inverts the result for the negated variant (`NotEqual`). This function
/// does not perform any comparison work itself.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

impl Context {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// Both operands are evaluated first, left then right, using
    /// `eval_child`. A function value appearing as either operand raises
    /// `RuntimeError::Calculation` before the operator is applied — functions
    /// are first-class values but cannot participate in arithmetic or
    /// comparison. The resulting values are then passed to
    /// [`Context::eval_binary`].
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: Operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Option<Value>> {
        let left = self.eval_child(left, line)?;
        let right = self.eval_child(right, line)?;

        if left.is_function() || right.is_function() {
            return Err(RuntimeError::Calculation { op, line });
        }

        Ok(Some(Self::eval_binary(op, &left, &right, line)?))
    }

    /// Evaluates a binary operation between two primitive values.
    ///
    /// - `+` adds two numbers or concatenates two strings.
    /// - `-`, `*`, `/`, `%` require two numbers and follow IEEE-754 float
    ///   semantics: dividing by zero yields an infinity or NaN, never an
    ///   error.
    /// - `<`, `>` compare two numbers in total order or two strings
    ///   lexicographically.
    /// - `==`, `!=` use structural equality on primitives with no coercion;
    ///   values of different kinds are simply unequal.
    ///
    /// Any other operand combination raises `RuntimeError::TypeMismatch`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use scrawl::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    /// let line = 1;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, line);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mod, Mul, NotEqual, Sub};
        use Value::{Number, Str};

        match op {
            Add => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(a + b)),
                (Str(a), Str(b)) => Ok(Str(format!("{a}{b}"))),
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Sub | Mul | Div | Mod => match (left, right) {
                (Number(a), Number(b)) => Ok(Number(match op {
                                                        Sub => a - b,
                                                        Mul => a * b,
                                                        Div => a / b,
                                                        Mod => a % b,
                                                        _ => unreachable!(),
                                                    })),
                _ => Err(type_mismatch(op, left, right, line)),
            },

            Less | Greater => Self::eval_ordering(op, left, right, line),

            Equal | NotEqual => Ok(Value::Bool(equality_op_result(op, left == right))),
        }
    }

    /// Evaluates an ordering comparison (`<` or `>`).
    ///
    /// Numbers are compared in total order (NaN sorts after every other
    /// value, matching `ordered_float`); strings are compared
    /// lexicographically. Operands of mismatched or non-orderable kinds —
    /// including booleans — raise `RuntimeError::TypeMismatch`.
    fn eval_ordering(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<Value> {
        use BinaryOperator::{Greater, Less};
        use Value::{Number, Str};

        let ordering = match (left, right) {
            (Number(a), Number(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Str(a), Str(b)) => a.cmp(b),
            _ => return Err(type_mismatch(op, left, right, line)),
        };

        Ok(Value::Bool(match op {
                           Less => ordering.is_lt(),
                           Greater => ordering.is_gt(),
                           _ => unreachable!(),
                       }))
    }
}

/// Builds the `TypeMismatch` error for an invalid operand combination.
fn type_mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("Cannot use {op} on {left} and {right}"),
                                 line }
}
