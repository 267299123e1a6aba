use thiserror::Error;

/// Represents a malformed numeric literal.
///
/// Every variant carries the character position at which the scanner gave up.
/// The lexer turns these into `Error` tokens anchored at the start of the
/// literal, so the position here is the more precise of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A run of leading digits was not followed by `.`.
    #[error("Expected input '.' at position {position}")]
    ExpectedDecimalPoint {
        /// Position of the offending character.
        position: usize,
    },
    /// A digit was required, e.g. after a leading `.` or an exponent sign.
    #[error("Expected digit at position {position}")]
    ExpectedDigit {
        /// Position of the offending character.
        position: usize,
    },
    /// The literal did not start with a digit or `.`.
    #[error("Expected digit or '.' at position {position}")]
    ExpectedDigitOrPoint {
        /// Position of the offending character.
        position: usize,
    },
    /// An exponent marker was followed by something other than a sign or digit.
    #[error("Expected sign or digit at position {position}")]
    ExpectedSignOrDigit {
        /// Position of the offending character.
        position: usize,
    },
}

impl LexError {
    /// Gets the position of the offending character.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedDecimalPoint { position }
            | Self::ExpectedDigit { position }
            | Self::ExpectedDigitOrPoint { position }
            | Self::ExpectedSignOrDigit { position } => *position,
        }
    }
}
