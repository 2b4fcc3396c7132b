use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, Position},
    error::RuntimeError,
    interpreter::{
        environment::Scope,
        evaluator::core::{Context, EvalResult},
        value::core::{Closure, Value},
    },
};

impl Context {
    /// Binds a function definition in the top-level scope.
    ///
    /// The closure captures the scope as it stands before its own binding is
    /// added. The binding itself lands just past the captured horizon, which
    /// is where the body's lookup of its own name (or of functions defined
    /// later) finds it.
    pub(crate) fn define_function(&self, def: &FunctionDef) {
        let closure = Closure { name:   def.name.clone(),
                                params: def.params.clone(),
                                body:   Rc::clone(&def.body),
                                scope:  self.globals.capture(), };
        self.globals.define(&def.name, Value::from(closure));
    }

    /// Evaluates a function call.
    ///
    /// Steps, in order:
    /// 1. Resolve `callee` in `scope`; it must be bound to a closure.
    /// 2. Evaluate the arguments left to right in the caller's scope.
    /// 3. Check the argument count against the closure's parameters.
    /// 4. Bind the parameters in a fresh child of the closure's captured
    ///    scope and evaluate the body there.
    ///
    /// # Errors
    /// - `UndefinedFunction` if nothing binds `callee`.
    /// - `NotCallable` if `callee` is bound to a number.
    /// - `ArgumentCountMismatch` on an arity mismatch.
    /// - Any error raised while evaluating an argument or the body.
    pub(crate) fn eval_call(&self,
                            callee: &str,
                            arguments: &[Expr],
                            position: Position,
                            scope: &Scope)
                            -> EvalResult<f64> {
        let closure = match scope.lookup(callee) {
            Some(Value::Closure(closure)) => closure,
            Some(Value::Number(_)) => {
                return Err(RuntimeError::NotCallable { name: callee.to_string(),
                                                       position });
            },
            None => {
                return Err(RuntimeError::UndefinedFunction { name: callee.to_string(),
                                                             position });
            },
        };

        let args = arguments.iter()
                            .map(|arg| self.eval(arg, scope))
                            .collect::<EvalResult<Vec<f64>>>()?;

        self.call_closure(&closure, args, position)
    }

    /// Applies a closure to already evaluated arguments.
    ///
    /// # Parameters
    /// - `closure`: The function to run.
    /// - `args`: Argument values, in parameter order.
    /// - `position`: Location of the call, used for the arity error.
    ///
    /// # Returns
    /// The value of the body.
    pub fn call_closure(&self,
                        closure: &Closure,
                        args: Vec<f64>,
                        position: Position)
                        -> EvalResult<f64> {
        if args.len() != closure.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { name: closure.name.clone(),
                                                             expected: closure.arity(),
                                                             found: args.len(),
                                                             position });
        }

        tracing::trace!(function = %closure.name, ?args, "calling function");

        let frame = closure.scope.child();
        for (param, value) in closure.params.iter().zip(args) {
            frame.define(param, Value::Number(value));
        }

        self.eval(&closure.body, &frame)
    }
}
