//! # calcfront
//!
//! calcfront is a small arithmetic expression front end written in Rust.
//! It lexes text into tokens, parses the tokens into an expression tree under
//! a two-level precedence grammar, and evaluates the tree to a number. Both
//! the lexer and the parser recover from errors, so a single pass reports
//! every problem it can find along with its position.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{CalcError, ContextWindow},
    interpreter::{lexer, parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` tree built by the parser and the
/// `BinaryOperator` set it uses, including the `Unknown` placeholder the
/// parser inserts when it repairs a missing operator.
pub mod ast;
/// Provides the error types for lexing, parsing, and evaluation.
///
/// Each phase reports through its own channel: lexical errors travel as
/// `Error` tokens, syntax errors as positioned diagnostics, and evaluation
/// errors as a `RuntimeError`. `CalcError` gathers them for callers that just
/// want a number.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Attaches character positions for context.
/// - Renders diagnostics against the source with a configurable window.
pub mod error;
/// Orchestrates the pipeline from text to number.
///
/// This module ties together the cursor, lexer, parser, and evaluator, and
/// exposes each stage on its own for callers that want to choose their own
/// error policy.
pub mod interpreter;

pub use interpreter::{lexer::lex, parser::parse};

/// Lexes, parses, and evaluates `source`.
///
/// Parsing is only attempted if lexing produced no `Error` tokens, and
/// evaluation only if parsing produced no diagnostics. Syntax diagnostics are
/// rendered against `source` using `window`.
///
/// # Errors
/// Returns [`CalcError::Lexical`] with every lexer message,
/// [`CalcError::Syntax`] with every rendered diagnostic, or
/// [`CalcError::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use calcfront::{error::ContextWindow, evaluate_source};
///
/// let value = evaluate_source("2. + 3. * 4.", ContextWindow::default()).unwrap();
/// assert_eq!(value, 14.0);
///
/// // Bare integers are not literals.
/// assert!(evaluate_source("2 + 3.", ContextWindow::default()).is_err());
/// ```
pub fn evaluate_source(source: &str, window: ContextWindow) -> Result<f64, CalcError> {
    let tokens = lexer::lex(source);
    if lexer::has_errors(&tokens) {
        return Err(CalcError::Lexical(lexer::error_messages(&tokens)));
    }

    let outcome = parser::parse(&tokens);
    let expression = outcome.into_result().map_err(|diagnostics| {
                                              let rendered = diagnostics.iter()
                                                                        .map(|d| d.render(source, window))
                                                                        .collect();
                                              CalcError::Syntax(rendered)
                                          })?;

    Ok(expression.evaluate()?)
}

/// Evaluates `source` and prints the outcome.
///
/// Prints the number on success, otherwise each lexer message, rendered
/// diagnostic, or runtime error on its own line. Returns whether a number was
/// produced.
pub fn run_interactive(source: &str, window: ContextWindow) -> bool {
    match evaluate_source(source, window) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            for message in e.messages() {
                println!("{message}");
            }
            false
        },
    }
}
