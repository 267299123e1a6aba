use calcfront::{
    error::{CalcError, ContextWindow, RuntimeError},
    evaluate_source, lex, parse,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate_source(src, ContextWindow::default()) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate_source(src, ContextWindow::default()) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1. + 2.", 3.0);
    assert_value("7. * 9.", 63.0);
    assert_value("8. - 5.", 3.0);
    assert_value("10. / 4.", 2.5);
}

#[test]
fn product_binds_tighter_than_sum() {
    assert_value("2. + 3. * 4.", 14.0);
    assert_value("2. * 3. + 4.", 10.0);
    assert_value("1. + 8. / 2. - 3.", 2.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2. + 3.) * 4.", 20.0);
    assert_value("2. * (3. + 4.)", 14.0);
    assert_value("((1.5))", 1.5);
    assert_value("(((2.) + (3.)) * ((4.)))", 20.0);
}

#[test]
fn operators_are_left_associative() {
    assert_value("10. - 4. - 3.", 3.0);
    assert_value("64. / 4. / 2.", 8.0);
    assert_value("2. / 4. * 8.", 4.0);
}

#[test]
fn literal_forms() {
    assert_value(".5", 0.5);
    assert_value("5.", 5.0);
    assert_value("5.0e-3", 0.005);
    assert_value("5.0E+3f", 5000.0);
    assert_value("5.e3", 5000.0);
    assert_value("2.5L", 2.5);
    assert_value("12.f", 12.0);
    assert_value(".25e2l", 25.0);
}

#[test]
fn spaces_are_optional_and_ignored() {
    assert_value("(2.+3.)*4.", 20.0);
    assert_value("   2.   *   3.   ", 6.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("1. / 0.", f64::INFINITY);

    let nan = evaluate_source("0. / 0.", ContextWindow::default()).unwrap();
    assert!(nan.is_nan());

    let negative = evaluate_source("(0. - 1.) / 0.", ContextWindow::default()).unwrap();
    assert_eq!(negative, f64::NEG_INFINITY);
}

#[test]
fn bare_integers_are_lexical_errors() {
    let err = assert_failure("5 + 1.");
    assert!(matches!(&err, CalcError::Lexical(messages)
                     if messages == &["Expected input '.' at position 1".to_string()]));
}

#[test]
fn every_lexical_error_is_reported() {
    let err = assert_failure("1 + x. * 3.e");
    assert_eq!(err.messages(),
               vec!["Expected input '.' at position 1".to_string(),
                    "Expected digit or '.' at position 4".to_string(),
                    "Expected sign or digit at position 12".to_string()]);
}

#[test]
fn syntax_errors_are_rendered_with_context() {
    let err = assert_failure("2.)");
    assert!(matches!(err, CalcError::Syntax(_)));
    assert_eq!(err.to_string(), "Invalid ')' at position 2        \"2.[)]\"");
}

#[test]
fn every_syntax_error_is_reported() {
    let err = assert_failure("(5.0 6. 1.) * 8.0");
    assert_eq!(err.messages(),
               vec!["Expected operator at position 5        \"(5.0 [x] 6. 1.)\"".to_string(),
                    "Expected operator at position 8        \"(5.0 6. [x] 1.) * \"".to_string()]);
}

#[test]
fn context_window_is_configurable() {
    let window = ContextWindow { preview:  2,
                                 postview: 1, };
    let err = evaluate_source("(5.0 6. 1.) * 8.0", window).unwrap_err();
    assert_eq!(err.messages()[1],
               "Expected operator at position 8        \". [x] 1.\"");
}

#[test]
fn repaired_tree_refuses_to_evaluate() {
    let expression = parse(&lex("(5.0 6. 1.) * 8.0")).expression.unwrap();
    assert_eq!(expression.evaluate(), Err(RuntimeError::UnknownOperation));
}

#[test]
fn stray_parenthesis_still_yields_value() {
    let outcome = parse(&lex("2.)"));
    assert_eq!(outcome.expression.unwrap().evaluate(), Ok(2.0));
}

#[test]
fn empty_input_fails() {
    let err = assert_failure("");
    assert_eq!(err.messages(),
               vec!["Expected number or expression in parentheses at position 0        \"[x]\"".to_string()]);
}
