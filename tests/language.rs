use pretty_assertions::assert_eq;
use reckon::{
    ast::Position,
    error::ErrorKind,
    get_result, parse_program, run,
};

#[track_caller]
fn assert_output(src: &str, expected: &[&str]) {
    match get_result(src) {
        Ok(lines) => assert_eq!(lines, expected, "program:\n{src}"),
        Err(e) => panic!("Script failed: {e}\nprogram:\n{src}"),
    }
}

#[track_caller]
fn assert_error_kind(src: &str, kind: ErrorKind, needles: &[&str]) {
    match get_result(src) {
        Ok(lines) => panic!("Script succeeded but was expected to fail; printed {lines:?}"),
        Err(e) => {
            assert_eq!(e.kind(), Some(kind), "unexpected error: {e}");
            let message = e.to_string().to_lowercase();
            for needle in needles {
                assert!(message.contains(needle), "'{message}' does not mention '{needle}'");
            }
        },
    }
}

#[test]
fn basic_arithmetic() {
    assert_output("print 2 + 3", &["5"]);
    assert_output("print 2 + 3 * 4", &["14"]);
    assert_output("print (2 + 3) * 4", &["20"]);
    assert_output("print 10 - 3\nprint -5 + 10", &["7", "5"]);
    assert_output("print 10 / 2\nprint 10 % 3", &["5", "1"]);
}

#[test]
fn associativity_and_fractions() {
    assert_output("print 10 - 4 - 3", &["3"]);
    assert_output("print 8 / 4 * 2", &["4"]);
    assert_output("print 7 / 2", &["3.5"]);
    assert_output("print 1 / 10", &["0.1"]);
    assert_output("print 0.1 + 0.2", &["0.30000000000000004"]);
    assert_output("print -7 % 3\nprint 7 % -3", &["-1", "1"]);
    assert_output("print --4\nprint -(2 - 5)", &["4", "3"]);
    assert_output("print 0 * -1", &["0"]);
}

#[test]
fn variables() {
    assert_output("let x = 5\nprint x", &["5"]);
    assert_output("let x = 5\nlet y = x + 3\nprint y", &["8"]);
    assert_output("let a = 1\nlet b = 2\nlet c = 3\nprint a + b + c", &["6"]);
    assert_output("let x = 1\nlet x = x + 1\nprint x", &["2"]);
}

#[test]
fn functions() {
    assert_output("fn double(x) = x * 2\nprint double(5)", &["10"]);
    assert_output("fn add(a, b) = a + b\nprint add(3, 4)", &["7"]);
    assert_output("fn f(x) = x + 1\nfn g(x) = x * 2\nprint g(f(3))", &["8"]);
    assert_output("let base = 10\nfn addBase(x) = x + base\nprint addBase(5)", &["15"]);
    assert_output("fn sq(x) = x * x\nfn dbl(x) = x * 2\nprint dbl(sq(3))", &["18"]);
    assert_output("fn answer() = 42\nprint answer()", &["42"]);
}

#[test]
fn parameters_shadow_globals() {
    assert_output("let x = 1\nfn f(x) = x * 10\nprint f(5)\nprint x", &["50", "1"]);
}

#[test]
fn recursion() {
    let fact = "fn fact(n) = if n <= 1 then 1 else n * fact(n - 1)\n";
    assert_output(&format!("{fact}print fact(1)"), &["1"]);
    assert_output(&format!("{fact}print fact(5)"), &["120"]);
    assert_output(&format!("{fact}print fact(10)"), &["3628800"]);
    assert_output("fn fib(n) = if n <= 1 then n else fib(n-1) + fib(n-2)\nprint fib(10)",
                  &["55"]);
}

#[test]
fn mutual_recursion_sees_later_definitions() {
    let src = "fn is_even(n) = if n == 0 then 1 else is_odd(n - 1)\n\
               fn is_odd(n) = if n == 0 then 0 else is_even(n - 1)\n\
               print is_even(10)\n\
               print is_odd(7)";
    assert_output(src, &["1", "1"]);
}

#[test]
fn deep_recursion_does_not_overflow() {
    assert_output("fn count(n) = if n == 0 then 0 else 1 + count(n - 1)\nprint count(20000)",
                  &["20000"]);
}

#[test]
fn deeply_nested_expression_is_freed() {
    let program = parse_program(&format!("print {}1", "-".repeat(1_000_000))).unwrap();
    assert_eq!(program.len(), 1);
    drop(program);

    assert_output(&format!("print {}1", "-".repeat(10_001)), &["-1"]);
}

#[test]
fn conditionals() {
    assert_output("print if 5 > 3 then 1 else 0", &["1"]);
    assert_output("print if 3 > 5 then 1 else 0", &["0"]);
    assert_output("print if 5 == 5 then 100 else 0", &["100"]);
    assert_output("let x = 5\nprint if x > 3 then if x > 10 then 2 else 1 else 0", &["1"]);
    assert_output("let a = 10\nlet b = 20\nprint if a < b then a + b else a - b", &["30"]);
    assert_output("print if 2 != 2 then 1 else 0\nprint if -1 then 7 else 8", &["0", "7"]);
}

#[test]
fn untaken_branch_is_never_evaluated() {
    assert_output("print if 1 then 2 else 1 / 0", &["2"]);
    assert_output("print if 0 then missing else 3", &["3"]);
}

#[test]
fn conditional_as_operand() {
    assert_output("print 1 + if 0 then 10 else 20", &["21"]);
    assert_output("print (if 1 then 2 else 3) * 10", &["20"]);
}

#[test]
fn comparisons_produce_numbers() {
    assert_output("print 1 < 2\nprint 2 <= 1\nprint (3 >= 3) + (4 == 4)", &["1", "0", "2"]);
}

#[test]
fn closure_capture_is_static() {
    assert_output("let x = 10\nfn addX(y) = x + y\nlet x = 20\nprint addX(5)", &["15"]);
}

#[test]
fn redefined_function_keeps_earlier_callers() {
    let src = "fn f() = 1\nfn g() = f()\nfn f() = 2\nprint g()\nprint f()";
    assert_output(src, &["1", "2"]);
}

#[test]
fn full_program() {
    let src = "
let x = 10
let y = 3
print x + y * 2
print (x + y) * 2
fn double(n) = n * 2
fn square(n) = n * n
print double(5)
print square(4)
print double(square(3))
fn factorial(n) = if n <= 1 then 1 else n * factorial(n - 1)
print factorial(5)
print factorial(10)
fn fib(n) = if n <= 1 then n else fib(n-1) + fib(n-2)
print fib(10)
fn add(a, b) = a + b
fn mult(a, b) = a * b
print add(3, 4)
print mult(add(2, 3), 4)
let base = 100
fn addBase(n) = n + base
print addBase(50)
let a = 5
let b = 10
print if a < b then 1 else 0
print if a > b then 1 else 0
";
    assert_output(src,
                  &["16", "26", "10", "16", "18", "120", "3628800", "55", "7", "20", "150", "1",
                    "0"]);
}

#[test]
fn comments_and_blank_lines() {
    assert_output("// nothing but a comment\n", &[]);
    assert_output("", &[]);
    assert_output("\r\nlet x = 2 // two\r\n\r\nprint x\r\n", &["2"]);
}

#[test]
fn undefined_names() {
    assert_error_kind("print undefined_var", ErrorKind::UndefinedVariable, &["undefined"]);
    assert_error_kind("print notFunc(5)", ErrorKind::UndefinedFunction, &["undefined"]);
    assert_error_kind("fn f(a) = a + b\nprint f(1)", ErrorKind::UndefinedVariable, &["'b'"]);
}

#[test]
fn functions_are_not_values() {
    assert_error_kind("fn f(a) = a\nprint f + 1", ErrorKind::UndefinedVariable, &["function"]);
    assert_error_kind("fn f(a) = a\nlet g = f", ErrorKind::UndefinedVariable, &["undefined"]);
    assert_error_kind("let x = 3\nprint x(1)", ErrorKind::UndefinedFunction, &["undefined"]);
}

#[test]
fn division_by_zero() {
    assert_error_kind("print 10 / 0", ErrorKind::DivisionByZero, &["division", "zero"]);
    assert_error_kind("print 10 % 0", ErrorKind::DivisionByZero, &["division", "zero"]);
    assert_error_kind("let z = 1 - 1\nprint 5 / z", ErrorKind::DivisionByZero, &["line 2"]);
}

#[test]
fn syntax_errors() {
    assert_error_kind("let x = = 5", ErrorKind::Syntax, &["syntax"]);
    assert_error_kind("print 1 + * 2", ErrorKind::Syntax, &["syntax"]);
    assert_error_kind("print (1 + 2", ErrorKind::Syntax, &["syntax", "')'"]);
    assert_error_kind("print 1 < 2 < 3", ErrorKind::Syntax, &["syntax", "chained"]);
    assert_error_kind("print if 1 then 2", ErrorKind::Syntax, &["'else'"]);
    assert_error_kind("print 2 # 3", ErrorKind::Syntax, &["'#'", "line 1, column 9"]);
    assert_error_kind("fn f(a, a) = a", ErrorKind::Syntax, &["duplicate"]);
    assert_error_kind("x = 5", ErrorKind::Syntax, &["statement"]);
}

#[test]
fn errors_report_their_position() {
    assert_eq!(get_result("print 1 +").unwrap_err().position(),
               Some(Position::new(1, 10)));
    assert_eq!(get_result("let z = 0\nprint 5 / z").unwrap_err().position(),
               Some(Position::new(2, 9)));
    assert_eq!(get_result("print f(1)").unwrap_err().position(),
               Some(Position::new(1, 7)));
}

#[test]
fn wrong_argument_count() {
    assert_error_kind("fn add(a, b) = a + b\nprint add(1)",
                      ErrorKind::ArgumentCountMismatch,
                      &["argument", "expected 2, found 1"]);
    assert_error_kind("fn one() = 1\nprint one(1, 2)",
                      ErrorKind::ArgumentCountMismatch,
                      &["argument"]);
}

#[test]
fn arguments_are_evaluated_before_the_arity_check() {
    assert_error_kind("fn f(a) = a\nprint f(1, 2 / 0)", ErrorKind::DivisionByZero, &["zero"]);
}

#[test]
fn syntax_error_prevents_any_output() {
    let mut out = Vec::new();
    let err = run("print 1\nprint 2 +", &mut out).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Syntax));
    assert!(out.is_empty());
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let mut out = Vec::new();
    let err = run("print 1\nprint 2\nprint missing\nprint 3", &mut out).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::UndefinedVariable));
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
}

#[test]
fn running_twice_is_identical() {
    let src = "fn fib(n) = if n <= 1 then n else fib(n-1) + fib(n-2)\nprint fib(15)\nprint 1 / 3";
    let first = get_result(src).unwrap();
    let second = get_result(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["610", "0.3333333333333333"]);
}
