/// Core parsing logic for programs and expressions.
///
/// Contains the entry point that splits a token stream into statements, the
/// expression entry point, and the conditional (`if`) form.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and the atoms of the grammar: literals,
/// identifiers, calls, parenthesized expressions and nested conditionals.
pub mod unary;

/// Binary expression parsing.
///
/// Implements one function per precedence tier: comparison, additive and
/// multiplicative.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers for consuming expected tokens, parsing comma-separated
/// lists and building uniform error values.
pub mod utils;

/// Statement parsing.
///
/// Implements the three statement forms: `let`, `fn` and `print`.
pub mod statement;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, Position, Statement},
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse_program},
    };

    fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
        parse_program(&tokenize(source)?)
    }

    /// Renders an expression fully parenthesized so tree shape is easy to
    /// compare.
    fn show(expr: &Expr) -> String {
        match expr {
            Expr::Number { value, .. } => value.to_string(),
            Expr::Identifier { name, .. } => name.clone(),
            Expr::UnaryOp { op, operand, .. } => format!("({op}{})", show(operand)),
            Expr::BinaryOp { left, op, right, .. } => {
                format!("({} {op} {})", show(left), show(right))
            },
            Expr::IfExpr { condition,
                           then_branch,
                           else_branch,
                           .. } => format!("(if {} then {} else {})",
                                           show(condition),
                                           show(then_branch),
                                           show(else_branch)),
            Expr::Call { callee, arguments, .. } => {
                let args: Vec<String> = arguments.iter().map(show).collect();
                format!("{callee}({})", args.join(", "))
            },
        }
    }

    fn printed(source: &str) -> String {
        match parse(source).unwrap().as_slice() {
            [Statement::Print { expr, .. }] => show(expr),
            other => panic!("expected a single print statement, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(printed("print 1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(printed("print (1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn same_tier_operators_associate_left() {
        assert_eq!(printed("print 10 - 4 - 3"), "((10 - 4) - 3)");
        assert_eq!(printed("print 8 / 4 * 2"), "((8 / 4) * 2)");
        assert_eq!(printed("print 7 % 4 / 2"), "((7 % 4) / 2)");
    }

    #[test]
    fn unary_minus_binds_tightest_and_repeats() {
        assert_eq!(printed("print -2 * 3"), "((-2) * 3)");
        assert_eq!(printed("print --x"), "(-(-x))");
        assert_eq!(printed("print 1 - -1"), "(1 - (-1))");
    }

    #[test]
    fn comparison_is_below_arithmetic() {
        assert_eq!(printed("print 1 + 2 < 4 * 5"), "((1 + 2) < (4 * 5))");
        assert_eq!(printed("print (1 < 2) == 1"), "((1 < 2) == 1)");
    }

    #[test]
    fn nested_conditionals() {
        assert_eq!(printed("print if x > 3 then if x > 10 then 2 else 1 else 0"),
                   "(if (x > 3) then (if (x > 10) then 2 else 1) else 0)");
    }

    #[test]
    fn conditional_as_operand_takes_the_rest_of_the_line() {
        assert_eq!(printed("print 1 + if c then 2 else 3 + 4"),
                   "(1 + (if c then 2 else (3 + 4)))");
    }

    #[test]
    fn calls_take_expression_arguments() {
        assert_eq!(printed("print f()"), "f()");
        assert_eq!(printed("print fib(n - 1) + fib(n - 2)"),
                   "(fib((n - 1)) + fib((n - 2)))");
    }

    #[test]
    fn whitespace_may_separate_callee_and_arguments() {
        assert_eq!(printed("print f (3)"), "f(3)");
        assert_eq!(printed("print f\t( )"), "f()");
    }

    #[test]
    fn expressions_carry_their_introducing_token() {
        let program = parse("print 1 + 2 * x\nprint -f(y)").unwrap();
        let [Statement::Print { expr: sum, .. }, Statement::Print { expr: negated, .. }] =
            program.as_slice()
        else {
            panic!("expected two print statements, got {program:?}");
        };
        assert_eq!(sum.position(), Position::new(1, 9));
        let Expr::BinaryOp { left, right, .. } = sum else {
            panic!("expected a binary operation, got {sum:?}");
        };
        assert_eq!(left.position(), Position::new(1, 7));
        assert_eq!(right.position(), Position::new(1, 13));
        let Expr::UnaryOp { operand, .. } = negated else {
            panic!("expected a negation, got {negated:?}");
        };
        assert_eq!(negated.position(), Position::new(2, 7));
        assert_eq!(operand.position(), Position::new(2, 8));
    }

    #[test]
    fn statements_carry_keyword_positions() {
        let program = parse("\n// header\nlet x = 1\n\nfn id(a) = a\nprint id(x)\n").unwrap();
        let positions: Vec<Position> = program.iter().map(Statement::position).collect();
        assert_eq!(positions,
                   vec![Position::new(3, 1), Position::new(5, 1), Position::new(6, 1)]);
    }

    #[test]
    fn function_definition_shape() {
        let program = parse("fn add(a, b) = a + b").unwrap();
        let [Statement::Function(def)] = program.as_slice() else {
            panic!("expected a function definition, got {program:?}");
        };
        assert_eq!(def.name, "add");
        assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(show(&def.body), "(a + b)");
    }

    #[test]
    fn blank_program_is_empty() {
        assert_eq!(parse("").unwrap(), Vec::<Statement>::new());
        assert_eq!(parse("\n\n  // nothing here\n").unwrap(), Vec::<Statement>::new());
    }

    #[test]
    fn double_equals_in_let_is_a_syntax_error() {
        let err = parse("let x = = 5").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { position, .. } if position == Position::new(1, 9)));
        assert!(err.to_string().contains("Syntax error"));
    }

    #[test]
    fn chained_comparison_is_rejected() {
        assert!(matches!(parse("print 1 < 2 < 3"),
                         Err(ParseError::ChainedComparison { .. })));
    }

    #[test]
    fn consecutive_operators_are_rejected() {
        assert!(matches!(parse("print 1 + * 2"),
                         Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn missing_closing_paren() {
        assert!(matches!(parse("print (1 + 2"),
                         Err(ParseError::ExpectedClosingParen { opened, .. }) if opened == Position::new(1, 7)));
    }

    #[test]
    fn missing_else_reaches_end_of_input() {
        assert!(matches!(parse("print if 1 then 2"),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn trailing_tokens_after_statement() {
        assert!(matches!(parse("print 1 2"),
                         Err(ParseError::UnexpectedTrailingTokens { .. })));
        assert!(matches!(parse("let x = 1 let y = 2"),
                         Err(ParseError::UnexpectedTrailingTokens { .. })));
    }

    #[test]
    fn bare_expression_is_not_a_statement() {
        assert!(matches!(parse("1 + 2"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn duplicate_parameter_is_rejected() {
        let err = parse("fn f(a, b, a) = a").unwrap_err();
        assert_eq!(err,
                   ParseError::DuplicateParameter { function: "f".into(),
                                                    name:     "a".into(),
                                                    position: Position::new(1, 12), });
    }

    #[test]
    fn keyword_cannot_name_a_variable() {
        assert!(parse("let if = 1").is_err());
    }
}
