/// Lexical errors.
///
/// Defines the failures that can occur while scanning a numeric literal. A
/// lexical error never aborts the lexer; it is rendered into an `Error` token
/// and lexing resumes at the next space.
pub mod lex_error;
/// Syntactic diagnostics.
///
/// Defines the positional records collected by the parser instead of failing
/// on the first mismatch, together with the context window used to render them
/// against the original source.
pub mod diagnostic;
/// Runtime errors.
///
/// Contains the errors that can be raised while reducing an expression tree to
/// a number.
pub mod runtime_error;

use thiserror::Error;

pub use diagnostic::{ContextWindow, Diagnostic};
pub use lex_error::LexError;
pub use runtime_error::RuntimeError;

/// Represents every way the convenience layer can fail to produce a number.
///
/// The three channels stay separate: lexical messages come from `Error`
/// tokens, syntax messages are rendered diagnostics, and runtime errors come
/// from the evaluator.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The lexer produced one or more `Error` tokens; parsing was not attempted.
    #[error("{}", .0.join("\n"))]
    Lexical(Vec<String>),
    /// The parser reported diagnostics, each already rendered with context.
    #[error("{}", .0.join("\n"))]
    Syntax(Vec<String>),
    /// The tree was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Reading an input file failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Returns the individual messages carried by this error, one per line of
    /// output.
    ///
    /// ## Example
    /// ```
    /// use calcfront::error::CalcError;
    ///
    /// let err = CalcError::Lexical(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(err.messages(), vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(err.to_string(), "a\nb");
    /// ```
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Lexical(messages) | Self::Syntax(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}
