use tracing::{debug, instrument};

use crate::{
    ast::Expression,
    error::Diagnostic,
    interpreter::{
        cursor::Cursor,
        token::{Token, TokenKind},
    },
};

/// The result of a parse pass.
///
/// Parsing never stops at the first error. The pass always consumes the whole
/// token stream and reports every problem it can locate, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The best-effort tree. It may contain `Unknown` nodes where an operator
    /// was missing. It is `None` only if an operand was missing altogether,
    /// in which case a diagnostic says where.
    pub expression:  Option<Expression>,
    /// Every syntax problem found, ordered by position. Empty iff the input
    /// was well formed.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// Returns `true` if the input was well formed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Converts the outcome into the tree, or the diagnostics if there were
    /// any.
    ///
    /// ## Errors
    /// Returns the diagnostics if the pass reported at least one.
    pub fn into_result(self) -> Result<Expression, Vec<Diagnostic>> {
        match self.expression {
            Some(expression) if self.diagnostics.is_empty() => Ok(expression),
            _ => Err(self.diagnostics),
        }
    }
}

/// Parsing context for one pass over a token stream.
///
/// The grammar is:
/// ```text
/// sum          := product sum_tail
/// sum_tail     := (('+' | '-') product)*
/// product      := atom product_tail
/// product_tail := (('*' | '/') atom)*
/// atom         := '(' sum ')' | NUMBER
/// ```
/// Each parse method returns `Option<Expression>`; `None` means an atom was
/// missing below it. Operands are still parsed after a `None` so that later
/// diagnostics are not lost.
pub struct Parser {
    pub(in crate::interpreter::parser) cursor:      Cursor<Token>,
    pub(in crate::interpreter::parser) diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a parser over `tokens`.
    ///
    /// A stream that does not end with an `End` token gets one appended just
    /// past its last token, so the cursor's end sentinel is always `End`.
    #[must_use]
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|token| token.kind.is_end()) {
            let position = tokens.last().map_or(0, position_after);
            tokens.push(Token::end(position));
        }
        Self { cursor:      Cursor::new(tokens),
               diagnostics: Vec::new(), }
    }

    /// Runs the pass to completion.
    ///
    /// After the first `sum`, any remaining tokens are folded into the tree:
    /// stray `)` are reported and skipped, `* /` resume the product level, and
    /// everything else resumes the sum level (where a missing operator is
    /// reported and repaired).
    #[must_use]
    pub fn run(mut self) -> ParseOutcome {
        let mut expression = self.parse_sum();

        while !self.peek_kind().is_end() {
            while self.peek_kind() == TokenKind::RParen {
                let position = self.cursor.current().position;
                self.report(Diagnostic::targeted("Invalid ')'", position));
                self.cursor.advance();
            }

            expression = match self.peek_kind() {
                TokenKind::Star | TokenKind::Slash => self.product_tail(expression),
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Number
                | TokenKind::LParen
                | TokenKind::Error => self.sum_tail(expression),
                TokenKind::RParen | TokenKind::End => expression,
            };
        }

        ParseOutcome { expression,
                       diagnostics: self.diagnostics }
    }

    pub(in crate::interpreter::parser) fn peek_kind(&self) -> TokenKind {
        self.cursor.current().kind
    }

    pub(in crate::interpreter::parser) fn report(&mut self, diagnostic: Diagnostic) {
        debug!(position = diagnostic.position,
               message = %diagnostic.message,
               "syntax diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Consumes a token of `kind`, or reports that `representation` was
    /// expected and leaves the cursor where it is.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 representation: &str) {
        if self.peek_kind() == kind {
            self.cursor.advance();
        } else {
            let position = self.cursor.current().position;
            self.report(Diagnostic::new(format!("Expected '{representation}'"), position));
        }
    }
}

/// Gets the offset just past `token`. Only number tokens carry their source
/// text; every other kind spans one character.
fn position_after(token: &Token) -> usize {
    match (&token.kind, &token.text) {
        (TokenKind::Number, Some(text)) => token.position + text.chars().count(),
        _ => token.position + 1,
    }
}

/// Parses a token stream into a best-effort tree plus diagnostics.
///
/// `Error` tokens are reported with their lexer message and skipped; callers
/// that want the usual "no parse after a lexical error" policy should check
/// the stream first.
///
/// ## Example
/// ```
/// use calcfront::interpreter::{lexer::lex, parser::parse};
///
/// let outcome = parse(&lex("(5.0 6. 1.) * 8.0"));
/// assert_eq!(outcome.diagnostics.len(), 2);
/// assert_eq!(outcome.expression.unwrap().to_string(),
///            "(((5.0 ? 6.0) ? 1.0) * 8.0)");
/// ```
#[must_use]
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    Parser::new(tokens.to_vec()).run()
}
