/// The environment module provides lexical scopes.
///
/// A scope is a chain of append-only frames mapping names to values.
/// Variables and functions share one namespace. Closures keep a snapshot of
/// their defining scope, so rebinding a name later does not change what an
/// existing function sees.
///
/// # Responsibilities
/// - Defines and resolves bindings, innermost frame first.
/// - Creates call frames and closure snapshots.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and comparisons, binds variables and functions, and
/// writes the output of `print` statements.
///
/// # Responsibilities
/// - Evaluates AST nodes against a scope.
/// - Applies user-defined functions, including recursive ones.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Keeps newlines, which separate statements, and drops comments.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. The whole program is parsed before anything runs.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces operator precedence and associativity.
/// - Validates grammar, reporting the first error with its position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A binding holds either a number or a closure. Expressions always evaluate
/// to numbers; closures live only in scopes and are reached by calls.
pub mod value;
