use logos::Logos;

use crate::{ast::Position, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Statement separator.
    #[token("\n")]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by the scanner
    /// itself; [`tokenize`] appends it.
    EndOfInput,
}

impl Token {
    /// Describes the token the way diagnostics refer to it.
    ///
    /// ## Example
    /// ```
    /// use reckon::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Equals.describe(), "'='");
    /// assert_eq!(Token::Identifier("x".into()).describe(), "identifier 'x'");
    /// assert_eq!(Token::NewLine.describe(), "end of line");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Let | Self::Fn | Self::Print | Self::If | Self::Then | Self::Else => {
                format!("keyword '{}'", self.lexeme())
            },
            Self::NewLine => "end of line".to_string(),
            Self::EndOfInput => "end of input".to_string(),
            _ => format!("'{}'", self.lexeme()),
        }
    }

    /// The fixed source text of keywords and symbols.
    fn lexeme(&self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Fn => "fn",
            Self::Print => "print",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Number(_)
            | Self::Identifier(_)
            | Self::Comment
            | Self::NewLine
            | Self::Ignored
            | Self::EndOfInput => "",
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the column reached by the previous token, so
/// each token's column is found by counting only the characters since then.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:   usize,
    /// Byte offset of the last position handed out.
    pub offset: usize,
    /// Column (in characters) at `offset`.
    pub column: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:   1,
               offset: 0,
               column: 1, }
    }
}

impl LexerExtras {
    /// Converts a byte offset on the current line into a [`Position`].
    ///
    /// Offsets must not decrease between calls on the same line.
    fn position(&mut self, source: &str, offset: usize) -> Position {
        self.column += source[self.offset..offset].chars().count();
        self.offset = offset;
        Position::new(self.line, self.column)
    }

    /// Moves to the line starting at byte offset `next_line_start`.
    fn advance_line(&mut self, next_line_start: usize) {
        self.line += 1;
        self.offset = next_line_start;
        self.column = 1;
    }
}

/// Converts source text into a positioned token stream.
///
/// The returned vector always ends with [`Token::EndOfInput`]. Newlines are
/// kept as [`Token::NewLine`] because they separate statements; comments and
/// horizontal whitespace are dropped.
///
/// # Errors
/// - `UnrecognizedCharacter` for text that starts no token.
/// - `LiteralTooLarge` for a numeric literal that overflows `f64`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::Position,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("let x = 5").unwrap();
/// assert_eq!(tokens[0], (Token::Let, Position::new(1, 1)));
/// assert_eq!(tokens[3], (Token::Number(5.0), Position::new(1, 9)));
/// assert_eq!(tokens.last().unwrap().0, Token::EndOfInput);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, Position)>> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = lexer.extras.position(source, span.start);

        match token {
            Ok(Token::NewLine) => {
                tokens.push((Token::NewLine, position));
                lexer.extras.advance_line(span.end);
            },
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                let slice = lexer.slice();
                if slice.starts_with(|c: char| c.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                             position });
                }
                return Err(ParseError::UnrecognizedCharacter { found: slice.to_string(),
                                                               position });
            },
        }
    }

    let end = lexer.extras.position(source, source.len());
    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens.push((Token::EndOfInput, end));

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the literal overflows, which the lexer reports as an error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}
