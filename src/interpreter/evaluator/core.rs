use std::io::Write;

use crate::{
    ast::{Expr, Position, Statement},
    error::{Error, RuntimeError},
    interpreter::{environment::Scope, value::core::Value},
    util::{
        num::{format_number, is_truthy},
        stack::ensure_sufficient_stack,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the top-level scope that every
/// `let` and `fn` statement extends. Function calls evaluate against child
/// scopes of the scope their closure captured, never against this one
/// directly.
///
/// ## Usage
///
/// A `Context` is created once per program run. Statements are executed in
/// order with [`Context::eval_statement`] (or all at once with
/// [`Context::eval_program`]); nothing persists once the context is dropped.
#[derive(Debug, Default)]
pub struct Context {
    /// The top-level scope.
    pub globals: Scope,
}

impl Context {
    /// Creates a new evaluation context with an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self { globals: Scope::new() }
    }

    /// Executes every statement of `program` in order.
    ///
    /// Execution stops at the first error. Lines already written to `out`
    /// stay written.
    ///
    /// # Parameters
    /// - `program`: The parsed statements.
    /// - `out`: Where `print` statements write their lines.
    ///
    /// # Example
    /// ```
    /// use reckon::{interpreter::evaluator::core::Context, parse_program};
    ///
    /// let program = parse_program("let x = 2\nprint x * 21").unwrap();
    /// let mut out = Vec::new();
    /// Context::new().eval_program(&program, &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
    /// ```
    pub fn eval_program<W: Write>(&self,
                                  program: &[Statement],
                                  out: &mut W)
                                  -> Result<(), Error> {
        for statement in program {
            self.eval_statement(statement, out)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - `let` evaluates its expression and binds the number in the
    ///   top-level scope.
    /// - `fn` builds a closure over the current top-level scope and binds it.
    /// - `print` evaluates its expression and writes one formatted line.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `out`: Output stream for `print`.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the expression, or an I/O error from
    /// writing to `out`.
    pub fn eval_statement<W: Write>(&self,
                                    statement: &Statement,
                                    out: &mut W)
                                    -> Result<(), Error> {
        tracing::debug!(line = statement.position().line, "executing statement");

        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, &self.globals)?;
                self.globals.define(name, Value::Number(value));
            },
            Statement::Function(def) => self.define_function(def),
            Statement::Print { expr, .. } => {
                let value = self.eval(expr, &self.globals)?;
                writeln!(out, "{}", format_number(value))?;
            },
        }
        Ok(())
    }

    /// Evaluates an expression to a number.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, identifiers, unary and binary operations, conditionals and
    /// function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: Scope that free names are resolved in.
    ///
    /// # Returns
    /// The resulting number.
    pub fn eval(&self, expr: &Expr, scope: &Scope) -> EvalResult<f64> {
        ensure_sufficient_stack(|| match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Identifier { name, position } => Self::eval_identifier(name, *position, scope),
            Expr::UnaryOp { op, operand, .. } => self.eval_unary_op(*op, operand, scope),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position, scope),
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => self.eval_if_expr(condition, then_branch, else_branch, scope),
            Expr::Call { callee,
                         arguments,
                         position, } => self.eval_call(callee, arguments, *position, scope),
        })
    }

    /// Resolves a name used in value position.
    ///
    /// # Errors
    /// - `UndefinedVariable` if nothing binds `name`.
    /// - `FunctionAsValue` if `name` is bound to a function.
    fn eval_identifier(name: &str, position: Position, scope: &Scope) -> EvalResult<f64> {
        match scope.lookup(name) {
            Some(Value::Number(n)) => Ok(n),
            Some(Value::Closure(_)) => Err(RuntimeError::FunctionAsValue { name: name.to_string(),
                                                                           position }),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          position }),
        }
    }

    /// Evaluates a conditional expression.
    ///
    /// Only the branch selected by the condition is evaluated, so the other
    /// branch may contain errors (or unbounded recursion) without effect. Any
    /// nonzero condition selects the `then` branch.
    fn eval_if_expr(&self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr,
                    scope: &Scope)
                    -> EvalResult<f64> {
        if is_truthy(self.eval(condition, scope)?) {
            self.eval(then_branch, scope)
        } else {
            self.eval(else_branch, scope)
        }
    }
}

// Closures defined at top level hold the global frame, which holds them back.
impl Drop for Context {
    fn drop(&mut self) {
        self.globals.clear();
    }
}
