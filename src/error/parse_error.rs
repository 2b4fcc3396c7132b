use crate::{ast::Position, error::ErrorKind};

/// Represents all errors that can occur during lexing or parsing.
///
/// Every message starts with `Syntax error`, so any failure in this phase is
/// recognisable from the diagnostic text alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Syntax error at {position}: unrecognized character '{found}'.")]
    UnrecognizedCharacter {
        /// The offending text.
        found:    String,
        /// Where it was found.
        position: Position,
    },
    /// A numeric literal does not fit in a finite double.
    #[error("Syntax error at {position}: literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where it was found.
        position: Position,
    },
    /// Found an unexpected token while parsing.
    #[error("Syntax error at {position}: expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar allows here.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Reached the end of input unexpectedly.
    #[error("Syntax error at {position}: expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar allows here.
        expected: String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Syntax error at {position}: expected closing parenthesis ')' for the '(' opened at \
             {opened}, found {found}.")]
    ExpectedClosingParen {
        /// Where the matching `(` was.
        opened:   Position,
        /// What was found instead.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A comparison operand was itself an unparenthesized comparison.
    #[error("Syntax error at {position}: comparison operators cannot be chained; found '{op}' \
             after a comparison.")]
    ChainedComparison {
        /// The second comparison operator.
        op:       String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// A function declared the same parameter twice.
    #[error("Syntax error at {position}: duplicate parameter '{name}' in definition of \
             '{function}'.")]
    DuplicateParameter {
        /// The function being defined.
        function: String,
        /// The repeated parameter name.
        name:     String,
        /// The source position where the error occurred.
        position: Position,
    },
    /// Found extra tokens after a statement should have ended.
    #[error("Syntax error at {position}: unexpected {found} after the end of the statement.")]
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        found:    String,
        /// The source position where the error occurred.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnrecognizedCharacter { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::ExpectedClosingParen { position, .. }
            | Self::ChainedComparison { position, .. }
            | Self::DuplicateParameter { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }

    /// All parse errors belong to the syntax kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Syntax
    }
}
