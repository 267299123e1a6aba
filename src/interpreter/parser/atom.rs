use crate::{
    ast::Expression,
    error::Diagnostic,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser {
    /// Parses an atom: `atom := '(' sum ')' | NUMBER`.
    ///
    /// A missing `)` is reported without consuming anything. Any token that
    /// cannot start an atom is reported and yields `None`; only `Error` tokens
    /// are consumed in that case, since nothing else can make use of them.
    pub(in crate::interpreter::parser) fn parse_atom(&mut self) -> Option<Expression> {
        let token = self.cursor.current().clone();

        match token.kind {
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_sum();
                self.expect(TokenKind::RParen, ")");
                inner
            },
            TokenKind::Number => {
                self.cursor.advance();
                match token.numeric_value() {
                    Ok(value) => Some(Expression::literal(value)),
                    Err(error) => {
                        self.report(Diagnostic::targeted(format!("Invalid number: {error}"),
                                                         token.position));
                        None
                    },
                }
            },
            TokenKind::Error => {
                self.cursor.advance();
                let message = token.text.unwrap_or_else(|| "Invalid token".to_string());
                self.report(Diagnostic::targeted(message, token.position));
                None
            },
            _ => {
                self.report(Diagnostic::new("Expected number or expression in parentheses",
                                            token.position));
                None
            },
        }
    }
}
