use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Division by zero is deliberately absent: it follows IEEE-754 and yields an
/// infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Evaluated a node synthesized by the parser where an operator was
    /// missing.
    #[error("unknown operation")]
    UnknownOperation,
}
