use std::{fmt, num::ParseFloatError};

/// Letters that may close a numeric literal without changing its value.
pub const NUMERIC_SUFFIXES: [char; 4] = ['f', 'F', 'l', 'L'];

/// The category of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A malformed literal; the token text holds the lexer's message.
    Error,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Numeric literal such as `5.`, `.5` or `2.5e-3f`.
    Number,
    /// End of input. Always the last token of a lexed stream.
    End,
}

impl TokenKind {
    /// Returns `true` for [`TokenKind::Error`].
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns `true` for [`TokenKind::End`].
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    /// Lower-case name used when displaying tokens.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Star => "star",
            Self::Slash => "slash",
            Self::LParen => "lparen",
            Self::RParen => "rparen",
            Self::Number => "number",
            Self::End => "end",
        }
    }
}

/// A classified, positioned fragment of source text.
///
/// Tokens are produced once by the lexer and read by the parser. Numbers keep
/// their raw text; conversion to `f64` happens on demand through
/// [`Token::numeric_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Character offset in the source where the token starts.
    pub position: usize,
    /// Literal text for `Number`, message for `Error`, `None` otherwise.
    pub text:     Option<String>,
}

impl Token {
    /// Creates a token without text.
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               position,
               text: None }
    }

    /// Creates a token carrying text.
    #[must_use]
    pub fn with_text(kind: TokenKind, position: usize, text: impl Into<String>) -> Self {
        Self { kind,
               position,
               text: Some(text.into()) }
    }

    /// Creates an `End` token.
    #[must_use]
    pub const fn end(position: usize) -> Self {
        Self::new(TokenKind::End, position)
    }

    /// Converts the literal text to a number.
    ///
    /// One trailing suffix letter (`f`, `F`, `l`, `L`) is stripped before the
    /// remainder is parsed as a floating-point literal.
    ///
    /// ## Errors
    /// Returns the float parser's error if the token has no text or the text
    /// is not a valid literal. Tokens produced by the lexer as `Number` always
    /// convert.
    ///
    /// ## Example
    /// ```
    /// use calcfront::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::with_text(TokenKind::Number, 0, "2.5e1f");
    /// assert_eq!(token.numeric_value(), Ok(25.0));
    /// ```
    pub fn numeric_value(&self) -> Result<f64, ParseFloatError> {
        let text = self.text.as_deref().unwrap_or_default();
        text.strip_suffix(&NUMERIC_SUFFIXES[..]).unwrap_or(text).parse()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "<{}: {text}>", self.kind.name()),
            None => write!(f, "<{}>", self.kind.name()),
        }
    }
}
