/// Number formatting helpers.
///
/// Renders evaluated numbers the way `print` shows them: integral values
/// without a fractional part, everything else in the shortest form that
/// reads back to the same double.
pub mod num;
/// Stack growth for deep recursion.
///
/// The parser and evaluator are plain recursive functions. Wrapping their
/// recursive steps in [`stack::ensure_sufficient_stack`] lets recursion depth
/// be bounded by memory instead of by the thread's initial stack.
pub mod stack;
