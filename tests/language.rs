use std::fs;

use scrawl::{error::RuntimeError, get_result, interpreter::value::Value};
use walkdir::WalkDir;

fn eval_value(src: &str) -> Option<Value> {
    match get_result(src, false) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn eval_number(src: &str) -> f64 {
    match eval_value(src) {
        Some(Value::Number(n)) => n,
        other => panic!("Expected a number from {src:?}, got {other:?}"),
    }
}

fn eval_bool(src: &str) -> bool {
    match eval_value(src) {
        Some(Value::Bool(b)) => b,
        other => panic!("Expected a boolean from {src:?}, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let error = get_result(src, false).expect_err("Script succeeded but was expected to fail");
    match error.downcast::<RuntimeError>() {
        Ok(e) => *e,
        Err(other) => panic!("Expected a runtime error, got: {other}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(eval_number("x != 1 + 2; x"), 3.0);
    assert_eq!(eval_number("x != 7 * 9; x"), 63.0);
    assert_eq!(eval_number("x != 8 - 5; x"), 3.0);
    assert_eq!(eval_number("x != 10 / 2; x"), 5.0);
    assert_eq!(eval_number("x != 7 % 4; x"), 3.0);
}

#[test]
fn running_result_is_last_expression_statement() {
    assert_eq!(eval_number("a != 1; b != a + 1; b"), 2.0);
    // A trailing assignment does not disturb the running result.
    assert_eq!(eval_number("5; x != 2"), 5.0);
    // A value-less call does: the result becomes absent.
    assert_eq!(eval_value("1; f != \\() {}; f()"), None);
    // No non-assignment statement at all means no result.
    assert_eq!(eval_value("x != 1; y != 2"), None);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(eval_number("1 + 2 * 3"), 7.0);
    assert_eq!(eval_number("(1 + 2) * 3"), 9.0);
    assert_eq!(eval_number("10 - 4 - 3"), 3.0);
    assert_eq!(eval_number("2 * 3 % 4"), 2.0);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert!(eval_number("1 / 0").is_infinite());
    assert!(eval_number("-1 / 0").is_infinite());
    assert!(eval_number("0 / 0").is_nan());
    assert!(eval_number("1 % 0").is_nan());
}

#[test]
fn string_concatenation() {
    assert_eq!(eval_value("\"1\" + \"2\""), Some(Value::Str("12".to_string())));
    assert_eq!(eval_value("'ab' + 'cd'"), Some(Value::Str("abcd".to_string())));
    assert_eq!(eval_number("1 + 2"), 3.0);
    assert!(matches!(runtime_error("1 + \"2\""),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("'1' - '2'"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn comparisons() {
    assert!(eval_bool("1 < 2"));
    assert!(!eval_bool("2 < 1"));
    assert!(eval_bool("3 > 2"));
    assert!(eval_bool("'a' < 'b'"));
    assert!(eval_bool("'b' > 'a'"));
    // Mismatched kinds cannot be ordered.
    assert!(matches!(runtime_error("1 < 'a'"),
                     RuntimeError::TypeMismatch { .. }));
    // Booleans cannot be ordered either.
    assert!(matches!(runtime_error("(1 < 2) < (2 < 3)"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn equality_is_structural_without_coercion() {
    assert!(eval_bool("1 == 1"));
    assert!(!eval_bool("1 == 2"));
    assert!(!eval_bool("1 == \"1\""));
    assert!(eval_bool("'x' == 'x'"));
    assert!(!eval_bool("'x' != 'x'"));
    assert!(eval_bool("(1 < 2) == (3 < 4)"));
    // Statement-level `!=` assigns; the comparison only exists nested.
    assert!(eval_bool("a != 1; a == 1"));
}

#[test]
fn function_definition_and_calls() {
    assert_eq!(eval_number("f != \\(x, y) { x + y }; f(2, 5)"), 7.0);
    assert_eq!(eval_number("square != \\(x) { x * x }; square(3)"), 9.0);
    // Arguments are evaluated in the caller's scope chain.
    assert_eq!(eval_number("x != 5; f != \\(a) { a * 2 }; f(x + 1)"), 12.0);
}

#[test]
fn functions_are_first_class_values() {
    assert_eq!(eval_number("f != \\() { 42 }; g != f; g()"), 42.0);
}

#[test]
fn duplicate_parameters_shadow_left_to_right() {
    assert_eq!(eval_number("f != \\(x, x) { x }; f(1, 2)"), 2.0);
}

#[test]
fn wrong_function_arity_is_error() {
    assert!(matches!(runtime_error("f != \\(x, y) { x + y }; f(3)"),
                     RuntimeError::TooFewArguments { expected: 2,
                                                     found: 1,
                                                     .. }));
    assert!(matches!(runtime_error("f != \\(x, y) { x + y }; f(1, 2, 3)"),
                     RuntimeError::TooManyArguments { expected: 2,
                                                      found: 3,
                                                      .. }));
}

#[test]
fn calling_non_functions_is_error() {
    assert!(matches!(runtime_error("g(1)"), RuntimeError::UnboundName { .. }));
    assert!(matches!(runtime_error("x != 1; x(2)"),
                     RuntimeError::NotAFunction { .. }));
}

#[test]
fn unbound_names_are_errors() {
    assert!(matches!(runtime_error("foo"), RuntimeError::UnboundName { .. }));
    assert!(matches!(runtime_error("y != x + 1"),
                     RuntimeError::UnboundName { .. }));
}

#[test]
fn assignment_rebinds_through_the_scope_chain() {
    // The call's frame has no `x`, so assignment overwrites the outer one.
    assert_eq!(eval_number("x != 1; f != \\() { x != 2 }; f(); x"), 2.0);
    // A genuinely new name only exists in the call's frame.
    assert_eq!(eval_number("f != \\() { y != 5; y }; f()"), 5.0);
    assert!(matches!(runtime_error("f != \\() { y != 5 }; f(); y"),
                     RuntimeError::UnboundName { .. }));
}

#[test]
fn scoping_is_dynamic_through_the_call_site() {
    // `f` reads `n`, which is bound only in `g`'s frame; with lexical
    // closures this would fail, with call-site scoping it resolves.
    assert_eq!(eval_number("f != \\() { n + 1 }; g != \\(n) { f() }; g(9)"), 10.0);
}

#[test]
fn value_less_functions() {
    assert_eq!(eval_value("f != \\(x) { y != x }; f(1)"), None);
    assert_eq!(eval_value("f != \\() {}; f()"), None);
    assert!(matches!(runtime_error("f != \\(x) { y != x }; z != f(1)"),
                     RuntimeError::UndefinedAssignment { .. }));
    // A value-less call cannot be an operand.
    assert!(matches!(runtime_error("f != \\() {}; f() + 1"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn functions_cannot_be_operands() {
    assert!(matches!(runtime_error("f != \\() { 1 }; f + 1"),
                     RuntimeError::Calculation { .. }));
    assert!(matches!(runtime_error("f != \\() { 1 }; 2 * f"),
                     RuntimeError::Calculation { .. }));
    assert!(matches!(runtime_error("f != \\() { 1 }; f == f"),
                     RuntimeError::Calculation { .. }));
}

#[test]
fn runtime_errors_carry_the_offending_line() {
    let error = runtime_error("y != 1\nz != y + missing");
    assert!(matches!(error, RuntimeError::UnboundName { line: 2, .. }),
            "got {error:?}");
}

#[test]
fn comments_and_newlines_are_insignificant() {
    assert_eq!(eval_number("1 + 1 // trailing comment"), 2.0);
    assert_eq!(eval_number("x != 1\n// set y too\ny != 2\nx + y"), 3.0);
    assert_eq!(eval_number("1 +\n2"), 3.0);
}

#[test]
fn script_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "scrawl")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected = content.lines()
                              .next()
                              .and_then(|line| line.strip_prefix("// expect: "))
                              .unwrap_or_else(|| panic!("{path:?} is missing an '// expect:' header"))
                              .to_string();

        match get_result(&content, false) {
            Ok(Some(value)) => {
                assert_eq!(value.to_string(), expected, "script {path:?}");
            },
            other => panic!("Script {path:?} produced {other:?}, expected {expected:?}"),
        }

        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
