use std::{cell::RefCell, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// One level of lexical scope.
///
/// Bindings are kept in definition order and never removed or overwritten;
/// rebinding a name pushes a new entry that shadows the old one.
struct Frame {
    bindings: RefCell<Vec<(String, Value)>>,
    parent:   Option<Scope>,
}

/// A view of a frame chain.
///
/// The innermost frame is shared by reference, so bindings added to it later
/// are seen by every `Scope` pointing at it. `horizon` records how many of its
/// entries existed when this view was captured: entries inside the horizon are
/// preferred over newer ones, which keeps a closure bound to the values that
/// were current at its definition while still letting it reach functions
/// defined afterwards (including itself).
///
/// Cloning a `Scope` is cheap and yields another view of the same frames.
#[derive(Clone)]
pub struct Scope {
    frame:   Rc<Frame>,
    horizon: usize,
}

impl Scope {
    /// Creates an empty top-level scope with no parent.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::environment::Scope;
    ///
    /// let globals = Scope::new();
    /// assert!(globals.lookup("x").is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_parent(None)
    }

    fn with_parent(parent: Option<Self>) -> Self {
        Self { frame:   Rc::new(Frame { bindings: RefCell::new(Vec::new()),
                                        parent }),
               horizon: usize::MAX, }
    }

    /// Appends a binding to the innermost frame.
    ///
    /// Always succeeds. An existing binding of the same name is shadowed, not
    /// replaced, so closures that captured it keep seeing the old value.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{environment::Scope, value::core::Value};
    ///
    /// let globals = Scope::new();
    /// globals.define("x", Value::Number(1.0));
    /// globals.define("x", Value::Number(2.0));
    /// assert_eq!(globals.lookup("x"), Some(Value::Number(2.0)));
    /// ```
    pub fn define(&self, name: &str, value: Value) {
        self.frame.bindings.borrow_mut().push((name.to_string(), value));
    }

    /// Resolves `name`, walking from the innermost frame outward.
    ///
    /// Within a frame, entries inside the horizon are searched newest first,
    /// then entries added after it, newest first. The first match wins.
    ///
    /// # Returns
    /// A clone of the bound value, or `None` if no frame binds `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            let bindings = current.frame.bindings.borrow();
            let (visible, later) = bindings.split_at(current.horizon.min(bindings.len()));

            let found = visible.iter()
                               .rev()
                               .chain(later.iter().rev())
                               .find(|(bound, _)| bound == name);
            if let Some((_, value)) = found {
                return Some(value.clone());
            }

            scope = current.frame.parent.as_ref();
        }
        None
    }

    /// Creates an empty frame whose parent is this scope.
    ///
    /// Used to hold a call's parameters; the frame is dropped with the
    /// returned `Scope` once the call finishes.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    /// Snapshots this scope for a closure.
    ///
    /// The returned view shares the same frames and fixes the horizon at the
    /// innermost frame's current length.
    #[must_use]
    pub fn capture(&self) -> Self {
        let len = self.frame.bindings.borrow().len();
        Self { frame:   Rc::clone(&self.frame),
               horizon: self.horizon.min(len), }
    }

    /// Drops every binding of the innermost frame.
    ///
    /// A top-level frame and the closures defined in it point at each other,
    /// so the frame has to be emptied explicitly to be freed.
    pub fn clear(&self) {
        let bindings = std::mem::take(&mut *self.frame.bindings.borrow_mut());
        drop(bindings);
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> =
            self.frame.bindings.borrow().iter().map(|(name, _)| name.clone()).collect();
        f.debug_struct("Scope")
         .field("names", &names)
         .field("horizon", &self.horizon)
         .field("has_parent", &self.frame.parent.is_some())
         .finish()
    }
}
