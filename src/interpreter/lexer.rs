use tracing::{debug, instrument, trace};

use crate::{
    error::LexError,
    interpreter::{
        cursor::Cursor,
        token::{NUMERIC_SUFFIXES, Token, TokenKind},
    },
};

/// The only character treated as whitespace. Tabs and newlines are not.
pub const SPACE: char = ' ';

const EXPONENT_MARKERS: [char; 2] = ['e', 'E'];
const SIGNS: [char; 2] = ['+', '-'];

/// Converts source text into a token stream.
///
/// Runs of spaces separate tokens. Malformed literals do not stop the pass:
/// each one becomes a single `Error` token positioned at the literal's start,
/// and scanning resumes at the next space. The stream always ends with
/// exactly one `End` token positioned at the input's length in characters.
///
/// ## Example
/// ```
/// use calcfront::interpreter::{lexer::lex, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = lex("(1. + .5) * 2e3").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::LParen,
///                 TokenKind::Number,
///                 TokenKind::Plus,
///                 TokenKind::Number,
///                 TokenKind::RParen,
///                 TokenKind::Star,
///                 TokenKind::Error,
///                 TokenKind::End]);
/// ```
#[must_use]
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let mut cursor = Cursor::new(source.chars().collect());
    let mut tokens = Vec::new();

    loop {
        while *cursor.current() == SPACE {
            cursor.advance();
        }
        if cursor.is_at_end() {
            break;
        }
        let token = next_token(&mut cursor);
        trace!(%token, "lexed");
        tokens.push(token);
    }

    tokens.push(Token::end(cursor.position()));
    tokens
}

/// Returns `true` if `tokens` holds at least one `Error` token.
#[must_use]
pub fn has_errors(tokens: &[Token]) -> bool {
    tokens.iter().any(|token| token.kind.is_error())
}

/// Collects the messages carried by `Error` tokens, in stream order.
#[must_use]
pub fn error_messages(tokens: &[Token]) -> Vec<String> {
    tokens.iter()
          .filter(|token| token.kind.is_error())
          .map(|token| token.text.clone().unwrap_or_default())
          .collect()
}

/// Lexes the token starting under the cursor.
///
/// The cursor must not be on a space or at the end.
fn next_token(cursor: &mut Cursor<char>) -> Token {
    let start = cursor.position();

    if let Some(kind) = punctuation(*cursor.current()) {
        cursor.advance();
        return Token::new(kind, start);
    }

    match scan_number(cursor) {
        Ok(token) => token,
        Err(error) => {
            while *cursor.current() != SPACE && !cursor.is_at_end() {
                cursor.advance();
            }
            debug!(start,
                   resumed_at = cursor.position(),
                   %error,
                   "recovered from malformed literal");
            Token::with_text(TokenKind::Error, start, error.to_string())
        },
    }
}

const fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        _ => None,
    }
}

/// Scans a numeric literal.
///
/// Grammar:
/// ```text
/// number   := ('.' digit+ | digit+ '.' digit*) (suffix | exponent)?
/// exponent := ('e' | 'E') ('+' | '-')? digit+ suffix?
/// suffix   := 'f' | 'F' | 'l' | 'L'
/// ```
/// A bare run of digits such as `5` is not a literal; it must be followed by
/// a `.`.
fn scan_number(cursor: &mut Cursor<char>) -> Result<Token, LexError> {
    let start = cursor.position();
    cursor.clear_record();

    match *cursor.current() {
        '.' => {
            cursor.advance();
            expect_digit(cursor)?;
        },
        c if c.is_ascii_digit() => {
            skip_digits(cursor);
            if *cursor.current() != '.' {
                return Err(LexError::ExpectedDecimalPoint { position: cursor.position() });
            }
            cursor.advance();
        },
        _ => return Err(LexError::ExpectedDigitOrPoint { position: cursor.position() }),
    }
    skip_digits(cursor);

    let c = *cursor.current();
    if NUMERIC_SUFFIXES.contains(&c) {
        cursor.advance();
    } else if EXPONENT_MARKERS.contains(&c) {
        cursor.advance();
        if SIGNS.contains(cursor.current()) {
            cursor.advance();
            expect_digit(cursor)?;
        } else if cursor.current().is_ascii_digit() {
            cursor.advance();
        } else {
            return Err(LexError::ExpectedSignOrDigit { position: cursor.position() });
        }
        skip_digits(cursor);
        if NUMERIC_SUFFIXES.contains(cursor.current()) {
            cursor.advance();
        }
    }

    let text: String = cursor.record().iter().collect();
    Ok(Token::with_text(TokenKind::Number, start, text))
}

fn expect_digit(cursor: &mut Cursor<char>) -> Result<(), LexError> {
    if !cursor.current().is_ascii_digit() {
        return Err(LexError::ExpectedDigit { position: cursor.position() });
    }
    cursor.advance();
    Ok(())
}

fn skip_digits(cursor: &mut Cursor<char>) {
    while cursor.current().is_ascii_digit() {
        cursor.advance();
    }
}
