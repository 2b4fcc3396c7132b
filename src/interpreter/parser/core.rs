use std::iter::Peekable;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            statement::parse_statement,
            utils::{expect, skip_newlines},
        },
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole token stream into a program.
///
/// Statements are separated by newlines; blank lines between them are
/// skipped. After each statement the next token must be a newline or the end
/// of input, otherwise the statement has trailing tokens and parsing fails.
///
/// A stream containing nothing but newlines yields an empty program.
///
/// Grammar: `program := NEWLINE* (statement (NEWLINE+ statement)*)? NEWLINE* EOF`
///
/// # Parameters
/// - `tokens`: The output of [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The statements in source order.
///
/// # Errors
/// The first syntax error encountered; parsing does not recover.
pub fn parse_program(tokens: &[(Token, Position)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_newlines(&mut iter);

        if matches!(iter.peek(), None | Some((Token::EndOfInput, _))) {
            break;
        }

        statements.push(parse_statement(&mut iter)?);

        match iter.peek() {
            Some((Token::NewLine | Token::EndOfInput, _)) | None => {},
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedTrailingTokens { found:    tok.describe(),
                                                                  position: *position, });
            },
        }
    }

    tracing::debug!(statements = statements.len(), "parsed program");
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. A leading `if` starts a
/// conditional, the loosest-binding form; anything else begins at the
/// comparison level and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := conditional | comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    ensure_sufficient_stack(|| match tokens.peek() {
        Some((Token::If, _)) => parse_conditional(tokens),
        _ => parse_comparison(tokens),
    })
}

/// Parses an `if` expression.
///
/// Syntax:
/// ```text
///     if <condition> then <expr> else <expr>
/// ```
/// The condition and both branches are full expressions, so conditionals
/// nest anywhere, including inside the condition. The `else` branch is
/// mandatory and extends as far to the right as possible.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// An `Expr::IfExpr` node representing the full conditional expression.
///
/// # Errors
/// - `UnexpectedToken` if `then` or `else` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let position = expect(tokens, &Token::If, "'if'")?;
    let condition = parse_expression(tokens)?;

    expect(tokens, &Token::Then, "'then' after the if condition")?;
    let then_branch = parse_expression(tokens)?;

    expect(tokens, &Token::Else, "'else' after the then branch")?;
    let else_branch = parse_expression(tokens)?;

    Ok(Expr::IfExpr { condition: Box::new(condition),
                      then_branch: Box::new(then_branch),
                      else_branch: Box::new(else_branch),
                      position })
}
