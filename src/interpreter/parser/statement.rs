use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Position, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a variable declaration (`let`).
/// - a function definition (`fn`).
/// - a print statement (`print`).
///
/// The leading keyword decides which; any other token is a syntax error,
/// because a bare expression is not a statement in this language.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.peek() {
        Some(&&(Token::Let, position)) => {
            tokens.next();
            parse_variable_declaration(tokens, position)
        },
        Some(&&(Token::Fn, position)) => {
            tokens.next();
            parse_function_definition(tokens, position)
        },
        Some(&&(Token::Print, position)) => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            Ok(Statement::Print { expr, position })
        },
        other => Err(unexpected("a statement ('let', 'fn' or 'print')", other.copied())),
    }
}

/// Parses the rest of a variable declaration after `let`.
///
/// A declaration has the form `let <identifier> = <expression>`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `let`.
/// - `position`: Location of the `let` keyword.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or is a keyword,
/// - `=` is missing,
/// - the expression is malformed (`let x = = 5`),
/// - input ends unexpectedly.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>,
                                     position: Position)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'=' after the variable name")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Let { name,
                        value,
                        position })
}

/// Parses the rest of a function definition after `fn`.
///
/// A definition has the form `fn <name>(<param>, ...) = <expression>`. The
/// parameter list may be empty, and every parameter name must be distinct.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `fn`.
/// - `position`: Location of the `fn` keyword.
///
/// # Returns
/// A `Statement::Function` whose body is shared behind an `Rc`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or the parameter list is malformed,
/// - a parameter name repeats,
/// - the `=` is missing,
/// - the body expression fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    position: Position)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Position)>
{
    let (name, _) = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, "'(' after the function name")?;

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let mut names: Vec<String> = Vec::with_capacity(params.len());
    for (param, param_position) in params {
        if names.contains(&param) {
            return Err(ParseError::DuplicateParameter { function: name,
                                                        name:     param,
                                                        position: param_position, });
        }
        names.push(param);
    }

    expect(tokens, &Token::Equals, "'=' after the parameter list")?;
    let body = parse_expression(tokens)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params: names,
                                         body: Rc::new(body),
                                         position }))
}
