use std::collections::HashMap;

use formulang::{
    ast::{BinaryOperator, Function},
    error::{EvalError, FormulaError, ParseError},
    interpreter::series::InputSeries,
    run,
};

fn close() -> HashMap<String, Vec<f64>> {
    HashMap::from([("CLOSE".to_string(),
                    vec![10.0, 12.0, 15.0, 14.0, 16.0, 18.0, 20.0, 19.0, 22.0, 25.0])])
}

fn parse_error(src: &str) -> ParseError {
    match run(src, close()) {
        Err(FormulaError::Parse(e)) => e,
        other => panic!("expected a parse error for {src:?}, got {other:?}"),
    }
}

fn eval_error(src: &str) -> EvalError {
    match run(src, close()) {
        Err(FormulaError::Eval(e)) => e,
        other => panic!("expected an evaluation error for {src:?}, got {other:?}"),
    }
}

#[test]
fn invalid_character() {
    assert_eq!(parse_error("V1:=CLOSE#2;"),
               ParseError::InvalidCharacter { character: '#',
                                              line:      1, });
    assert_eq!(parse_error("V1:=CLOSE;\n\nV2:=$;"),
               ParseError::InvalidCharacter { character: '$',
                                              line:      3, });
}

#[test]
fn unexpected_token_where_a_factor_belongs() {
    assert_eq!(parse_error("V1:=1+;"),
               ParseError::UnexpectedToken { token: "';'".to_string(),
                                             line:  1, });
    assert_eq!(parse_error("V1:=<1;"),
               ParseError::UnexpectedToken { token: "'<'".to_string(),
                                             line:  1, });
    assert_eq!(parse_error("V1:=MA(,2);"),
               ParseError::UnexpectedToken { token: "','".to_string(),
                                             line:  1, });
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(parse_error("V1:=CLOSE*"),
               ParseError::UnexpectedEndOfInput { line: 1 });
}

#[test]
fn missing_semicolon() {
    assert_eq!(parse_error("V1:=CLOSE"),
               ParseError::MissingSemicolon { found: "end of input".to_string(),
                                              line:  1, });
    assert_eq!(parse_error("V1:=CLOSE\nV2:=CLOSE;"),
               ParseError::MissingSemicolon { found: "'V2'".to_string(),
                                              line:  2, });
    assert_eq!(parse_error("V1:=CLOSE>=1;"),
               ParseError::MissingSemicolon { found: "'>='".to_string(),
                                              line:  1, });
}

#[test]
fn unclosed_parentheses() {
    assert_eq!(parse_error("V1:=(CLOSE+1;"),
               ParseError::ExpectedToken { expected: "')'",
                                           found:    "';'".to_string(),
                                           line:     1, });
    assert_eq!(parse_error("V1:=MA(CLOSE,2"),
               ParseError::ExpectedToken { expected: "',' or ')'",
                                           found:    "end of input".to_string(),
                                           line:     1, });
}

#[test]
fn reserved_words_cannot_be_assigned() {
    for word in ["CLOSE", "OPEN", "HIGH", "LOW", "MA", "REF", "HHV", "LLV", "SMA", "WMA", "EMA"] {
        assert_eq!(parse_error(&format!("{word}:=1;")),
                   ParseError::ReservedWordReassignment { name: word.to_string(),
                                                          line: 1, });
    }
}

#[test]
fn failed_run_returns_no_symbols() {
    let result = run("V1:=CLOSE; CLOSE:=1;", close());
    assert!(matches!(result,
                     Err(FormulaError::Parse(ParseError::ReservedWordReassignment { .. }))));
}

#[test]
fn names_resolve_only_to_earlier_assignments() {
    assert_eq!(parse_error("V1:=V2; V2:=CLOSE;"),
               ParseError::UndefinedReference { name: "V2".to_string(),
                                                line: 1, });
    assert_eq!(parse_error("V1:=FOO(CLOSE,2);"),
               ParseError::UndefinedReference { name: "FOO".to_string(),
                                                line: 1, });
    assert_eq!(parse_error("V1:=V1+1;"),
               ParseError::UndefinedReference { name: "V1".to_string(),
                                                line: 1, });
}

#[test]
fn wrong_argument_count() {
    assert_eq!(parse_error("V1:=MA(CLOSE);"),
               ParseError::WrongArgumentCount { function: Function::Ma,
                                                expected: 2,
                                                found:    1,
                                                line:     1, });
    assert_eq!(parse_error("V1:=REF(CLOSE,1,2);"),
               ParseError::WrongArgumentCount { function: Function::Ref,
                                                expected: 2,
                                                found:    3,
                                                line:     1, });
}

#[test]
fn window_argument_must_be_an_integer_literal() {
    assert_eq!(parse_error("V1:=MA(CLOSE,2.5);"),
               ParseError::NonIntegerArgument { function: Function::Ma,
                                                line:     1, });
    assert_eq!(parse_error("V1:=HHV(CLOSE,1+1);"),
               ParseError::NonIntegerArgument { function: Function::Hhv,
                                                line:     1, });
    assert_eq!(parse_error("N:=2; V1:=LLV(CLOSE,N);"),
               ParseError::NonIntegerArgument { function: Function::Llv,
                                                line:     1, });
}

#[test]
fn extreme_windows_must_be_positive() {
    assert_eq!(parse_error("V1:=HHV(CLOSE,0);"),
               ParseError::NonPositiveArgument { function: Function::Hhv,
                                                 value:    0,
                                                 line:     1, });
    assert_eq!(parse_error("V1:=LLV(CLOSE,0);"),
               ParseError::NonPositiveArgument { function: Function::Llv,
                                                 value:    0,
                                                 line:     1, });
}

#[test]
fn reserved_but_unimplemented_functions() {
    for (name, function) in [("SMA", Function::Sma), ("WMA", Function::Wma), ("EMA", Function::Ema)] {
        assert_eq!(eval_error(&format!("V1:={name}(CLOSE,3);")),
                   EvalError::UndefinedFunction { function,
                                                  line: 1 });
    }
}

#[test]
fn division_by_zero_reports_the_index() {
    assert_eq!(eval_error("V1:=CLOSE/0;"),
               EvalError::DivisionByZero { index: 0, line: 1 });
    assert_eq!(eval_error("V1:=CLOSE-REF(CLOSE,1);\nV2:=1/(V1-2);"),
               EvalError::DivisionByZero { index: 1, line: 2 });
}

#[test]
fn malformed_number_literal() {
    assert_eq!(eval_error("V1:=1.2.3;"),
               EvalError::NumberFormat { text: "1.2.3".to_string(),
                                         line: 1, });
    assert_eq!(eval_error("V1:=CLOSE+.;"),
               EvalError::NumberFormat { text: ".".to_string(),
                                         line: 1, });
}

#[test]
fn reserved_variable_without_data() {
    assert_eq!(eval_error("V1:=OPEN;"),
               EvalError::UndefinedVariable { name: "OPEN".to_string(),
                                              line: 1, });
    assert_eq!(eval_error("V1:=MA;"),
               EvalError::UndefinedVariable { name: "MA".to_string(),
                                              line: 1, });
}

#[test]
fn inconsistent_input_lengths() {
    let inputs = HashMap::from([("CLOSE".to_string(), vec![1.0, 2.0, 3.0]),
                                ("OPEN".to_string(), vec![1.0, 2.0])]);

    assert_eq!(InputSeries::new(inputs.clone()).unwrap_err(),
               EvalError::InconsistentSeriesLength { name:     "OPEN".to_string(),
                                                     expected: 3,
                                                     found:    2, });
    assert!(matches!(run("V1:=CLOSE;", inputs),
                     Err(FormulaError::Eval(EvalError::InconsistentSeriesLength { .. }))));
}

#[test]
fn error_messages_name_the_line() {
    let err = run("V1:=CLOSE;\nV2:=MA(CLOSE);", close()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 2: MA expects 2 arguments but 1 were given.");

    let err = run("V1:=CLOSE/0;", close()).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Division by zero at index 0.");
}

#[test]
fn mismatched_operands_are_reported() {
    let err = formulang::interpreter::evaluator::binary::apply_elementwise(BinaryOperator::Sub,
                                                                           &[1.0, 2.0],
                                                                           &[1.0],
                                                                           4).unwrap_err();
    assert_eq!(err,
               EvalError::LengthMismatch { op:    BinaryOperator::Sub,
                                           left:  2,
                                           right: 1,
                                           line:  4, });
}

#[test]
fn assignment_token_is_reported_as_written() {
    assert_eq!(parse_error("V1::CLOSE;"),
               ParseError::UnexpectedToken { token: "':'".to_string(),
                                             line:  1, });
    assert_eq!(parse_error("V1:=:=CLOSE;"),
               ParseError::UnexpectedToken { token: "':='".to_string(),
                                             line:  1, });
}

#[test]
fn end_of_input_reports_the_last_line() {
    assert_eq!(parse_error("V1:=CLOSE;\nV2:=(CLOSE"),
               ParseError::ExpectedToken { expected: "')'",
                                           found:    "end of input".to_string(),
                                           line:     2, });
}
