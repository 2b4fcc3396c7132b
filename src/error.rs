/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unexpected tokens,
/// missing delimiters and malformed statements, all detected before any
/// statement is evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a program:
/// unresolved names, division by zero and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::ast::Position;

/// The error taxonomy of the language.
///
/// Every concrete error maps onto exactly one of these kinds. The kinds are
/// what an external harness (or a test) cares about; the concrete variants
/// carry the detail a user needs to fix the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed token stream or grammar violation.
    Syntax,
    /// A name used as a value has no usable binding.
    UndefinedVariable,
    /// A name used in call position has no binding or is not callable.
    UndefinedFunction,
    /// The right operand of `/` or `%` was zero.
    DivisionByZero,
    /// A call supplied the wrong number of arguments.
    ArgumentCountMismatch,
}

/// Any error that can end a program run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The program could not be lexed or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Writing program output failed.
    #[error("I/O error while writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classifies the error, or returns `None` for I/O failures that are not
    /// part of the language's error taxonomy.
    ///
    /// ## Example
    /// ```
    /// use reckon::{error::ErrorKind, get_result};
    ///
    /// let err = get_result("print 1 / 0").unwrap_err();
    /// assert_eq!(err.kind(), Some(ErrorKind::DivisionByZero));
    /// ```
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse(e) => Some(e.kind()),
            Self::Runtime(e) => Some(e.kind()),
            Self::Io(_) => None,
        }
    }

    /// Returns the source position the error points at, or `None` for I/O
    /// failures.
    ///
    /// ## Example
    /// ```
    /// use reckon::{ast::Position, get_result};
    ///
    /// let err = get_result("print 2 # 3").unwrap_err();
    /// assert_eq!(err.position(), Some(Position::new(1, 9)));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => Some(e.position()),
            Self::Io(_) => None,
        }
    }
}
