use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_conditional, parse_expression},
            utils::{parse_comma_separated, unexpected},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// Supports the prefix `-` (numeric negation). Unary minus binds tighter than
/// any binary operator and may repeat, so `--x` is `-(-x)` and `-2 * 3` is
/// `(-2) * 3`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    if let Some(&&(Token::Minus, position)) = tokens.peek() {
        tokens.next();
        let operand = ensure_sufficient_stack(|| parse_unary(tokens))?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           operand: Box::new(operand),
                           position })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - `if` expressions used as operands
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | identifier_or_call
///              | "(" expression ")"
///              | conditional
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// Any token that cannot start an expression, for example the second `=` in
/// `let x = = 5` or the `*` in `1 + * 2`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some(&&(Token::Number(value), position)) => {
            tokens.next();
            Ok(Expr::Number { value, position })
        },
        Some((Token::Identifier(_), _)) => parse_identifier_or_call(tokens),
        Some((Token::LParen, _)) => parse_grouping(tokens),
        Some((Token::If, _)) => parse_conditional(tokens),
        other => Err(unexpected("an expression", other.copied())),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let opened = match tokens.next() {
        Some((Token::LParen, position)) => *position,
        other => return Err(unexpected("'('", other)),
    };
    let expr = parse_expression(tokens)?;
    match tokens.peek() {
        Some((Token::RParen, _)) => {
            tokens.next();
            Ok(expr)
        },
        Some((tok, position)) => Err(ParseError::ExpectedClosingParen { opened,
                                                                        found: tok.describe(),
                                                                        position: *position }),
        None => Err(ParseError::ExpectedClosingParen { opened,
                                                       found: Token::EndOfInput.describe(),
                                                       position: opened }),
    }
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// The function first consumes the identifier token. If the very next token
/// is `(`, a call expression is parsed with zero or more comma-separated
/// argument expressions. Otherwise, it is parsed as a reference to a value.
/// Horizontal whitespace never reaches the parser, so `f (3)` is a call too.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Call`] if followed by parentheses,
/// - [`Expr::Identifier`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the initial token is not an identifier,
/// - call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        other => return Err(unexpected("an identifier", other)),
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::Call { callee: name,
                            arguments,
                            position })
        },
        _ => Ok(Expr::Identifier { name, position }),
    }
}
