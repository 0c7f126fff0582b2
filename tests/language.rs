use calcu::{
    error::{Error, LexError, RuntimeError, SyntaxError},
    evaluate_expression,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_NESTING_DEPTH, MAX_OPERATORS},
        value::Value,
    },
};

fn assert_value(src: &str, expected: Value) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_error(src: &str, expected: Error) {
    match evaluate_expression(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e, expected, "wrong error for {src:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", Value::Integer(14));
    assert_value("2*3+4", Value::Integer(10));
    assert_value("20-12/4", Value::Integer(17));
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", Value::Integer(20));
    assert_value("2*(3+4)", Value::Integer(14));
    assert_value("((((7))))", Value::Integer(7));
}

#[test]
fn equal_precedence_operators_are_left_associative() {
    assert_value("8-3-2", Value::Integer(3));
    assert_value("10/2/5", Value::Integer(1));
    assert_value("2*6/3", Value::Integer(4));
    assert_value("1-2+3", Value::Integer(2));
}

#[test]
fn subtraction_can_go_negative() {
    assert_value("1-2", Value::Integer(-1));
    assert_value("(0-3)*(0-3)", Value::Integer(9));
}

#[test]
fn inexact_division_produces_a_real() {
    assert_value("7/2", Value::Real(3.5));
    assert_value("7/2*2", Value::Real(7.0));
    assert_value("1/4+1", Value::Real(1.25));
}

#[test]
fn results_print_like_numbers() {
    assert_eq!(evaluate_expression("2+3*4").unwrap().to_string(), "14");
    assert_eq!(evaluate_expression("10/2").unwrap().to_string(), "5");
    assert_eq!(evaluate_expression("7/2").unwrap().to_string(), "3.5");
    assert_eq!(evaluate_expression("7/2*2").unwrap().to_string(), "7.0");
    assert_eq!(evaluate_expression("3-5").unwrap().to_string(), "-2");
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate_expression("  2   +   3 ").unwrap(),
               evaluate_expression("2+3").unwrap());
    assert_value("\t( 1 +\n2 ) * 3\r\n", Value::Integer(9));
}

#[test]
fn evaluation_is_repeatable() {
    let first = evaluate_expression("(12 - 4) / 3").unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate_expression("(12 - 4) / 3").unwrap(), first);
    }
}

#[test]
fn division_by_zero_fails() {
    assert_error("5/0", RuntimeError::DivisionByZero { position: 1 }.into());
    assert_error("5/(3-3)", RuntimeError::DivisionByZero { position: 1 }.into());
    assert_error("1 + 7/2/0", RuntimeError::DivisionByZero { position: 7 }.into());
}

#[test]
fn missing_operand_is_a_syntax_error() {
    assert_error("2+*3",
                 SyntaxError::ExpectedOperand { found:    TokenKind::Mul,
                                                position: 2, }.into());
    assert_error("",
                 SyntaxError::ExpectedOperand { found:    TokenKind::EndOfInput,
                                                position: 0, }.into());
    assert_error("()",
                 SyntaxError::ExpectedOperand { found:    TokenKind::RParen,
                                                position: 1, }.into());
}

#[test]
fn unclosed_parenthesis_is_a_syntax_error() {
    assert_error("(1+2",
                 SyntaxError::UnexpectedToken { expected: TokenKind::RParen,
                                                found:    TokenKind::EndOfInput,
                                                position: 4, }.into());
}

#[test]
fn trailing_input_is_rejected() {
    assert_error("2+3 4",
                 SyntaxError::TrailingInput { found:    TokenKind::Integer,
                                              position: 4, }.into());
    assert_error("1)",
                 SyntaxError::TrailingInput { found:    TokenKind::RParen,
                                              position: 1, }.into());
}

#[test]
fn unknown_characters_are_lexical_errors() {
    assert_error("2+#3",
                 LexError::UnexpectedCharacter { character: '#',
                                                 position:  2, }.into());
    assert_error("2 + é",
                 LexError::UnexpectedCharacter { character: 'é',
                                                 position:  4, }.into());
    assert_error("1.5",
                 LexError::UnexpectedCharacter { character: '.',
                                                 position:  1, }.into());
}

#[test]
fn integer_limits_are_enforced() {
    assert_value("9223372036854775807", Value::Integer(i64::MAX));
    assert_error("9223372036854775807+1", RuntimeError::Overflow { position: 19 }.into());
    assert_error("9223372036854775808", RuntimeError::LiteralTooLarge { position: 0 }.into());
    assert_error("99999999999999999999",
                 LexError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                             position: 0, }.into());
    assert_error("9007199254740993/2", RuntimeError::PrecisionLoss { position: 16 }.into());
}

#[test]
fn real_results_that_overflow_fail() {
    let factor = "(9007199254740991/3)";
    let src = vec![factor; 25].join("*");
    assert!(matches!(evaluate_expression(&src),
                     Err(Error::Runtime(RuntimeError::Overflow { .. }))));
}

#[test]
fn long_operator_chains_are_limited() {
    let longest = vec!["1"; MAX_OPERATORS + 1].join("+");
    assert_value(&longest, Value::Integer(1025));

    let too_long = vec!["1"; 100_000].join("+");
    assert_error(&too_long,
                 SyntaxError::TooManyOperators { limit:    MAX_OPERATORS,
                                                 position: 2 * MAX_OPERATORS + 1, }.into());

    let mixed = vec!["2*3"; 100_000].join("-");
    assert!(matches!(evaluate_expression(&mixed),
                     Err(Error::Syntax(SyntaxError::TooManyOperators { .. }))));
}

#[test]
fn nesting_depth_is_limited() {
    let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert_value(&ok, Value::Integer(1));

    let deep = MAX_NESTING_DEPTH + 1;
    let too_deep = format!("{}1{}", "(".repeat(deep), ")".repeat(deep));
    assert_error(&too_deep,
                 SyntaxError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                               position: MAX_NESTING_DEPTH, }.into());
}

#[test]
fn error_messages_name_the_problem() {
    let message = |src: &str| evaluate_expression(src).unwrap_err().to_string();

    assert_eq!(message("5/0"), "Error at position 1: Division by zero.");
    assert_eq!(message("2+#3"), "Error at position 2: Unexpected character '#'.");
    assert_eq!(message("2+*3"), "Error at position 2: Expected integer or '(', found '*'.");
    assert_eq!(message("(1"), "Error at position 2: Expected ')', found end of input.");
}
