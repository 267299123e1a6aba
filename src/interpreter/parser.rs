/// Parser context and entry point.
///
/// Holds the token cursor and the diagnostics sink, and drives the top-level
/// recovery loop that re-enters the grammar after trailing tokens.
pub mod core;

/// Sum and product levels.
///
/// Implements the two left-associative operator levels and their
/// continuations, including the synthesized `Unknown` node used when an
/// operator is missing.
pub mod binary;

/// Atoms.
///
/// Parses numeric literals and parenthesised sub-expressions.
pub mod atom;

pub use self::core::{ParseOutcome, Parser, parse};
