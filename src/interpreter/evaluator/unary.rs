use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        environment::Scope,
        evaluator::core::{Context, EvalResult},
    },
};

impl Context {
    /// Evaluates the operand of a unary expression and applies the operator.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                operand: &Expr,
                                scope: &Scope)
                                -> EvalResult<f64> {
        let value = self.eval(operand, scope)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Applies a unary operator to a number.
    ///
    /// Supported operators:
    /// - `Negate`: IEEE negation, so `-(0)` is negative zero (printed as `0`).
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Negate => -value,
        }
    }
}
