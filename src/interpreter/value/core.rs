use std::{fmt, rc::Rc};

use crate::{ast::Expr, interpreter::environment::Scope};

/// Represents a runtime value in the interpreter.
///
/// Variables and functions share one namespace, so a binding holds either a
/// number or a closure. Expressions only ever evaluate to numbers; a closure
/// can be reached solely through a name in call position.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A user-defined function together with its captured scope.
    Closure(Rc<Closure>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Closure> for Value {
    fn from(c: Closure) -> Self {
        Self::Closure(Rc::new(c))
    }
}

impl Value {
    /// Returns the number held by this value, or `None` for a closure.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(2.5).as_number(), Some(2.5));
    /// ```
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Closure(_) => None,
        }
    }
}

/// Closures compare by identity: two values are the same function only if
/// they came from the same evaluation of a `fn` statement.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Closure(a), Self::Closure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A function value.
///
/// Created once per evaluated `fn` statement. The body is shared with the
/// AST, and `scope` is the defining scope as it stood at that moment, which
/// fixes what the body's free names refer to.
pub struct Closure {
    /// The name the function was defined under, used in diagnostics.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The body expression.
    pub body:   Rc<Expr>,
    /// The scope captured at definition.
    pub scope:  Scope,
}

impl Closure {
    /// The number of declared parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

// The captured scope usually contains this very closure, so it is left out.
impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}
