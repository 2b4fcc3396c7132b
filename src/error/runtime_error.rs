use crate::{
    ast::{BinaryOperator, Position},
    error::ErrorKind,
};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a name that is not bound anywhere in scope.
    #[error("Runtime error at {position}: undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Tried to use a function as a plain value.
    #[error("Runtime error at {position}: undefined variable '{name}'; '{name}' is a function \
             and can only be called.")]
    FunctionAsValue {
        /// The name of the function.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Called a name that is not bound anywhere in scope.
    #[error("Runtime error at {position}: undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Called a name that is bound to a number.
    #[error("Runtime error at {position}: undefined function '{name}'; '{name}' is a number, \
             not a function.")]
    NotCallable {
        /// The name that was called.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Attempted division (or remainder) by zero.
    #[error("Runtime error at {position}: division by zero in '{op}'.")]
    DivisionByZero {
        /// The operator that failed, `/` or `%`.
        op:       BinaryOperator,
        /// The source position where the error occurred.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Runtime error at {position}: argument count mismatch calling '{name}': expected \
             {expected}, found {found}.")]
    ArgumentCountMismatch {
        /// The function being called.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source position where the error occurred.
        position: Position,
    },
}

impl RuntimeError {
    /// Returns the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { position, .. }
            | Self::FunctionAsValue { position, .. }
            | Self::UndefinedFunction { position, .. }
            | Self::NotCallable { position, .. }
            | Self::DivisionByZero { position, .. }
            | Self::ArgumentCountMismatch { position, .. } => *position,
        }
    }

    /// Maps the error onto the language's error taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable { .. } | Self::FunctionAsValue { .. } => {
                ErrorKind::UndefinedVariable
            },
            Self::UndefinedFunction { .. } | Self::NotCallable { .. } => {
                ErrorKind::UndefinedFunction
            },
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::ArgumentCountMismatch { .. } => ErrorKind::ArgumentCountMismatch,
        }
    }
}
