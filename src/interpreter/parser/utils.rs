use std::iter::Peekable;

use crate::{
    ast::Position,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for a token the grammar does not allow here.
///
/// End of input gets its own variant so messages read naturally
/// ("found end of input") and tools can tell truncated programs apart.
///
/// # Parameters
/// - `expected`: Human readable description of what was allowed.
/// - `found`: The offending token and its position, if any.
pub(in crate::interpreter::parser) fn unexpected(expected: &str,
                                                 found: Option<&(Token, Position)>)
                                                 -> ParseError {
    match found {
        Some((Token::EndOfInput, position)) => {
            ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                               position: *position, }
        },
        Some((tok, position)) => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                               found:    tok.describe(),
                                                               position: *position, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   position: Position::default(), },
    }
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns an `UnexpectedToken` (or `UnexpectedEndOfInput`) error naming
/// `description` when the next token is something else. Nothing is consumed
/// in that case.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some((tok, position)) if tok == expected => {
            let position = *position;
            tokens.next();
            Ok(position)
        },
        other => Err(unexpected(description, other.copied())),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by function argument lists and parameter lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// opening delimiter must already have been consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            other => {
                return Err(unexpected(&format!("',' or {}", closing.describe()), other.copied()));
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Keywords are lexed as their
/// own tokens, so they can never be returned here.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier and its position.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some((Token::Identifier(name), position)) => {
            let parsed = (name.clone(), *position);
            tokens.next();
            Ok(parsed)
        },
        other => Err(unexpected("an identifier", other.copied())),
    }
}

/// Skips any run of newline tokens (blank lines).
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}
