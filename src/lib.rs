//! # reckon
//!
//! reckon is an interpreter for a small, expression-oriented calculator
//! language written in Rust. Programs bind numbers with `let`, define
//! (possibly recursive) functions with `fn`, branch with `if ... then ...
//! else ...`, and write results with `print`.
//!
//! ```text
//! fn fact(n) = if n <= 1 then 1 else n * fact(n - 1)
//! print fact(10)
//! ```
//!
//! A run goes through three phases: the source is tokenized, the whole token
//! stream is parsed into statements, and only then are the statements
//! evaluated in order. A syntax error therefore stops a program before it
//! prints anything, while a runtime error stops it after the lines already
//! printed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use std::io::Write;

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a program, and the [`ErrorKind`](error::ErrorKind) taxonomy
/// they map onto. Every error carries the line and column it refers to.
///
/// # Responsibilities
/// - Defines error enums for the syntax and runtime phases.
/// - Renders the diagnostics shown to users.
/// - Classifies errors for callers that need to react to them.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations to provide a complete runtime for programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// # Responsibilities
/// - Format numbers the way `print` shows them.
/// - Grow the stack on demand for deeply recursive programs.
pub mod util;

pub use interpreter::lexer::tokenize;

/// Lexes and parses a complete program without running it.
///
/// # Errors
/// The first syntax error in the source.
///
/// # Examples
/// ```
/// use reckon::parse_program;
///
/// let program = parse_program("let x = 1\nprint x + 1").unwrap();
/// assert_eq!(program.len(), 2);
///
/// let err = parse_program("let x = = 5").unwrap_err();
/// assert!(err.to_string().starts_with("Syntax error"));
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parser::core::parse_program(&tokens)
}

/// Runs a program, writing each printed line to `out`.
///
/// The whole source is parsed before any statement executes. Statements then
/// run in order against a fresh top-level scope; the first runtime error
/// stops the run, and whatever was printed before it stays in `out`.
///
/// # Errors
/// A parse error, a runtime error, or an I/O error from `out`.
///
/// # Examples
/// ```
/// use reckon::run;
///
/// let mut out = Vec::new();
/// run("print 7 / 2\nprint 10 / 0", &mut out).unwrap_err();
/// assert_eq!(String::from_utf8(out).unwrap(), "3.5\n");
/// ```
pub fn run<W: Write>(source: &str, out: &mut W) -> Result<(), Error> {
    let program = parse_program(source)?;
    tracing::debug!(statements = program.len(), "starting evaluation");

    let context = Context::new();
    context.eval_program(&program, out)
}

/// Runs a program and returns the lines it printed.
///
/// This is a convenience wrapper around [`run`] for tests and embedding.
///
/// # Errors
/// Returns an error if parsing or evaluation fails. Lines printed before a
/// runtime error are discarded; use [`run`] to keep them.
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// let source = "let x = 10\nfn f(y) = x + y\nlet x = 20\nprint f(5)";
/// assert_eq!(get_result(source).unwrap(), vec!["15"]);
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("print y + 1");
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<Vec<String>, Error> {
    let mut out = Vec::new();
    run(source, &mut out)?;

    let text = String::from_utf8_lossy(&out);
    Ok(text.lines().map(str::to_string).collect())
}
