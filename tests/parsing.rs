use scrawl::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::ParseError,
    parse,
};

fn single_expression(src: &str) -> Expr {
    let mut statements = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert_eq!(statements.len(), 1, "Expected one statement in {src:?}");
    match statements.remove(0) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

#[test]
fn numeric_literals() {
    assert!(matches!(single_expression("42"),
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == 42.0));
    assert!(matches!(single_expression("-3.5"),
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == -3.5));
    assert!(matches!(single_expression("+7"),
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == 7.0));
}

#[test]
fn string_literals_strip_quotes() {
    assert!(matches!(single_expression("\"hello\""),
                     Expr::Literal { value: LiteralValue::Str(s), .. } if s == "hello"));
    assert!(matches!(single_expression("'hello'"),
                     Expr::Literal { value: LiteralValue::Str(s), .. } if s == "hello"));
    assert!(matches!(single_expression("\"it's\""),
                     Expr::Literal { value: LiteralValue::Str(s), .. } if s == "it's"));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::BinaryOp { op, left, right, .. } = single_expression("a + b * c") else {
        panic!("Expected a binary root");
    };

    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(*left, Expr::Identifier { ref name, .. } if name == "a"));
    assert!(matches!(*right,
                     Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
}

#[test]
fn parenthesization_overrides_precedence() {
    let Expr::BinaryOp { op, left, right, .. } = single_expression("(a + b) * c") else {
        panic!("Expected a binary root");
    };

    assert_eq!(op, BinaryOperator::Mul);
    assert!(matches!(*left,
                     Expr::BinaryOp { op: BinaryOperator::Add, .. }));
    assert!(matches!(*right, Expr::Identifier { ref name, .. } if name == "c"));
}

#[test]
fn additive_chains_fold_left() {
    // 10 - 4 - 3 parses as (10 - 4) - 3.
    let Expr::BinaryOp { op, left, .. } = single_expression("10 - 4 - 3") else {
        panic!("Expected a binary root");
    };

    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left,
                     Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
}

#[test]
fn comparisons_are_reachable() {
    assert!(matches!(single_expression("a < b"),
                     Expr::BinaryOp { op: BinaryOperator::Less, .. }));
    assert!(matches!(single_expression("a + 1 > b * 2"),
                     Expr::BinaryOp { op: BinaryOperator::Greater, .. }));
    assert!(matches!(single_expression("a == b"),
                     Expr::BinaryOp { op: BinaryOperator::Equal, .. }));
}

#[test]
fn comparisons_do_not_chain() {
    assert!(matches!(parse("1 < 2 < 3"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn statement_level_bang_equal_is_assignment() {
    let statements = parse("a != 1").unwrap();
    assert!(matches!(&statements[0],
                     Statement::Assignment { name, value: Expr::Literal { .. }, .. } if name == "a"));

    // Even with an identifier on the right, statement level binds.
    let statements = parse("a != b").unwrap();
    assert!(matches!(&statements[0], Statement::Assignment { .. }));
}

#[test]
fn nested_bang_equal_is_not_equal_comparison() {
    assert!(matches!(single_expression("(a != b)"),
                     Expr::BinaryOp { op: BinaryOperator::NotEqual, .. }));
}

#[test]
fn subtraction_is_not_a_signed_literal() {
    // `1-2` must lex and parse as a subtraction, not `1` followed by `-2`.
    let Expr::BinaryOp { op, left, right, .. } = single_expression("1-2") else {
        panic!("Expected a binary root");
    };

    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left,
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == 1.0));
    assert!(matches!(*right,
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == 2.0));

    // A second sign attaches to the literal instead.
    let Expr::BinaryOp { right, .. } = single_expression("1 - -2") else {
        panic!("Expected a binary root");
    };
    assert!(matches!(*right,
                     Expr::Literal { value: LiteralValue::Number(n), .. } if n == -2.0));
}

#[test]
fn function_definition_shape() {
    let Expr::FunctionDefinition { def, .. } = single_expression("\\(x, y) { x + y }") else {
        panic!("Expected a function definition");
    };

    assert_eq!(def.params, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(def.body.len(), 1);

    let Expr::FunctionDefinition { def, .. } = single_expression("\\() {}") else {
        panic!("Expected a function definition");
    };
    assert!(def.params.is_empty());
    assert!(def.body.is_empty());
}

#[test]
fn function_call_shape() {
    let Expr::FunctionCall { name, arguments, .. } = single_expression("f(1, g(2), 'a')") else {
        panic!("Expected a function call");
    };

    assert_eq!(name, "f");
    assert_eq!(arguments.len(), 3);
    assert!(matches!(&arguments[1], Expr::FunctionCall { .. }));

    let Expr::FunctionCall { arguments, .. } = single_expression("f()") else {
        panic!("Expected a function call");
    };
    assert!(arguments.is_empty());
}

#[test]
fn statements_with_and_without_semicolons() {
    assert_eq!(parse("1; 2; 3").unwrap().len(), 3);
    assert_eq!(parse("1 2 3").unwrap().len(), 3);
    assert_eq!(parse("x != 1\ny != 2\nx + y").unwrap().len(), 3);
}

#[test]
fn comments_and_blank_input() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("// nothing here").unwrap().is_empty());
    assert_eq!(parse("1 + 1 // trailing comment").unwrap().len(), 1);
}

#[test]
fn identifiers_take_letters_then_alphanumerics() {
    assert!(matches!(single_expression("x1y"),
                     Expr::Identifier { name, .. } if name == "x1y"));
    // Underscores are not part of the identifier alphabet.
    assert!(parse("_x").is_err());
}

#[test]
fn malformed_input_is_rejected() {
    assert!(matches!(parse("(1 + 2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("f != \\(x) { x + 1"),
                     Err(ParseError::ExpectedClosingBrace { .. })));
    assert!(matches!(parse("\\x { 1 }"),
                     Err(ParseError::InvalidFunctionDefinition { .. })));
    assert!(matches!(parse("1 + "),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse("1 + 2 )"),
                     Err(ParseError::UnexpectedTrailingTokens { .. })));
    // Lexical failures: unterminated string, dangling dot, stray symbol.
    assert!(matches!(parse("\"unterminated"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("1."), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("@"), Err(ParseError::UnexpectedToken { .. })));
    // A sign must be followed by digits; there is no general unary minus.
    assert!(matches!(parse("- x"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn parse_errors_carry_the_offending_line() {
    let Err(ParseError::UnexpectedToken { line, .. }) = parse("x != 1\n$") else {
        panic!("Expected an unexpected-token error");
    };
    assert_eq!(line, 2);
}

#[test]
fn pretty_printed_ast_reparses_identically() {
    let source = "a != 1; b != (a + 2) * 3; f != \\(x) { x + a; x * b }; f(b) < 10";
    let statements = parse(source).unwrap();

    let printed = statements.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join("; ");
    let reparsed = parse(&printed).unwrap_or_else(|e| panic!("Reparse of {printed:?} failed: {e}"));

    assert_eq!(statements, reparsed);
}
