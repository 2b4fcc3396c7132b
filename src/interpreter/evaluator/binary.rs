use crate::{
    ast::{BinaryOperator, Expr, Position},
    error::RuntimeError,
    interpreter::{
        environment::Scope,
        evaluator::core::{Context, EvalResult},
    },
    util::num::bool_to_number,
};

impl Context {
    /// Evaluates both operands of a binary expression, left first, and
    /// applies the operator.
    ///
    /// # Parameters
    /// - `left`, `right`: Operand expressions.
    /// - `op`: The operator.
    /// - `position`: Location of the operator, used for errors.
    /// - `scope`: Scope the operands are evaluated in.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 position: Position,
                                 scope: &Scope)
                                 -> EvalResult<f64> {
        let left = self.eval(left, scope)?;
        let right = self.eval(right, scope)?;
        Self::eval_binary(op, left, right, position)
    }

    /// Applies a binary operator to two numbers.
    ///
    /// Arithmetic follows IEEE double semantics. `%` takes the sign of the
    /// dividend (`-7 % 3` is `-1`). Comparisons yield `1` when they hold and
    /// `0` otherwise.
    ///
    /// # Errors
    /// `DivisionByZero` when the right operand of `/` or `%` is zero, so
    /// programs never observe an infinity or `NaN` from division.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let at = Position::new(1, 9);
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7.0, 3.0, at).unwrap(), -1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::LessEqual, 2.0, 2.0, at).unwrap(), 1.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 10.0, 0.0, at).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: Position)
                       -> EvalResult<f64> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };

        #[allow(clippy::float_cmp)]
        let result = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div | Mod if right == 0.0 => {
                return Err(RuntimeError::DivisionByZero { op, position });
            },
            Div => left / right,
            Mod => left % right,
            Less => bool_to_number(left < right),
            Greater => bool_to_number(left > right),
            LessEqual => bool_to_number(left <= right),
            GreaterEqual => bool_to_number(left >= right),
            Equal => bool_to_number(left == right),
            NotEqual => bool_to_number(left != right),
        };
        Ok(result)
    }
}
