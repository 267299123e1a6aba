use calcfront::{
    interpreter::{
        cursor::Cursor,
        lexer::{error_messages, has_errors},
        token::{Token, TokenKind},
    },
    lex,
};

fn number(position: usize, text: &str) -> Token {
    Token::with_text(TokenKind::Number, position, text)
}

fn error(position: usize, message: &str) -> Token {
    Token::with_text(TokenKind::Error, position, message)
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|t| t.kind).collect()
}

#[test]
fn valid_literals_lex_to_one_number() {
    for literal in ["5.", ".5", "5.0", "5.e3", "5.0e-3", "5.0E+3f", "12.f", "1.5L", ".5e10l", "007.700"] {
        assert_eq!(lex(literal),
                   vec![number(0, literal), Token::end(literal.chars().count())],
                   "literal {literal:?}");
    }
}

#[test]
fn punctuation() {
    assert_eq!(lex("+-*/()"),
               vec![Token::new(TokenKind::Plus, 0),
                    Token::new(TokenKind::Minus, 1),
                    Token::new(TokenKind::Star, 2),
                    Token::new(TokenKind::Slash, 3),
                    Token::new(TokenKind::LParen, 4),
                    Token::new(TokenKind::RParen, 5),
                    Token::end(6)]);
}

#[test]
fn spaces_separate_tokens_and_are_skipped() {
    assert_eq!(lex("  1.  +  2. "),
               vec![number(2, "1."),
                    Token::new(TokenKind::Plus, 6),
                    number(9, "2."),
                    Token::end(12)]);
}

#[test]
fn empty_input_is_just_end() {
    assert_eq!(lex(""), vec![Token::end(0)]);
    assert_eq!(lex("    "), vec![Token::end(4)]);
}

#[test]
fn literal_ends_at_first_character_outside_its_grammar() {
    assert_eq!(lex("(1.)"),
               vec![Token::new(TokenKind::LParen, 0),
                    number(1, "1."),
                    Token::new(TokenKind::RParen, 3),
                    Token::end(4)]);
    assert_eq!(lex("1.5.3"), vec![number(0, "1.5"), number(3, ".3"), Token::end(5)]);
    assert_eq!(lex("2.f3."), vec![number(0, "2.f"), number(3, "3."), Token::end(5)]);
}

#[test]
fn bare_integer_is_rejected() {
    assert_eq!(lex("5"),
               vec![error(0, "Expected input '.' at position 1"), Token::end(1)]);
    assert_eq!(lex("5e3"),
               vec![error(0, "Expected input '.' at position 1"), Token::end(3)]);
}

#[test]
fn malformed_literals_report_the_failing_position() {
    assert_eq!(lex("."), vec![error(0, "Expected digit at position 1"), Token::end(1)]);
    assert_eq!(lex("5.e"),
               vec![error(0, "Expected sign or digit at position 3"), Token::end(3)]);
    assert_eq!(lex("5.e+"), vec![error(0, "Expected digit at position 4"), Token::end(4)]);
    assert_eq!(lex("5.ex"),
               vec![error(0, "Expected sign or digit at position 3"), Token::end(4)]);
    assert_eq!(lex("abc"),
               vec![error(0, "Expected digit or '.' at position 0"), Token::end(3)]);
}

#[test]
fn recovery_skips_to_next_space() {
    assert_eq!(lex("55x.+1. 3."),
               vec![error(0, "Expected input '.' at position 2"),
                    number(8, "3."),
                    Token::end(10)]);
}

#[test]
fn tabs_and_newlines_are_not_whitespace() {
    assert_eq!(lex("1.\t+ 2."),
               vec![number(0, "1."),
                    error(2, "Expected digit or '.' at position 2"),
                    number(5, "2."),
                    Token::end(7)]);
    assert_eq!(kinds("1.\n"), vec![TokenKind::Number, TokenKind::Error, TokenKind::End]);
}

#[test]
fn positions_count_characters_not_bytes() {
    assert_eq!(lex("é 1."),
               vec![error(0, "Expected digit or '.' at position 0"),
                    number(2, "1."),
                    Token::end(4)]);
}

#[test]
fn nul_in_input_is_not_end_of_stream() {
    assert_eq!(lex("\0 1."),
               vec![error(0, "Expected digit or '.' at position 0"),
                    number(2, "1."),
                    Token::end(4)]);
}

#[test]
fn error_helpers() {
    let tokens = lex("1. + 2 * x");
    assert!(has_errors(&tokens));
    assert_eq!(error_messages(&tokens),
               vec!["Expected input '.' at position 6".to_string(),
                    "Expected digit or '.' at position 9".to_string()]);
    assert!(!has_errors(&lex("1. + 2.")));
}

#[test]
fn numeric_values_strip_suffix() {
    let values: Vec<f64> = lex("2.5f 1.e2L .5")
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.numeric_value().unwrap())
        .collect();
    assert_eq!(values, vec![2.5, 100.0, 0.5]);
}

#[test]
fn tokens_display_like_the_debug_view() {
    let rendered: Vec<String> = lex("(1.) 5").iter().map(ToString::to_string).collect();
    assert_eq!(rendered,
               vec!["<lparen>",
                    "<number: 1.>",
                    "<rparen>",
                    "<error: Expected input '.' at position 6>",
                    "<end>"]);
}

#[test]
fn token_cursor_sentinel_is_last_token() {
    let mut cursor = Cursor::new(lex("1."));
    assert_eq!(cursor.current().kind, TokenKind::Number);
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(*cursor.current(), Token::end(2));
    assert_eq!(cursor.record().len(), 3);
    assert_eq!(cursor.position(), 3);

    cursor.clear_record();
    assert!(cursor.record().is_empty());

    let empty: Cursor<Token> = Cursor::new(Vec::new());
    assert_eq!(*empty.current(), Token::end(0));
}
