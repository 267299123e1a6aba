use crate::{
    ast::{BinaryOperator, Expression},
    error::Diagnostic,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser {
    /// Parses the sum level: `sum := product sum_tail`.
    pub(in crate::interpreter::parser) fn parse_sum(&mut self) -> Option<Expression> {
        let left = self.parse_product();
        self.sum_tail(left)
    }

    /// Folds `+`/`-` operands onto `left` until `)` or the end.
    ///
    /// Any other token where an operator belongs is reported as a missing
    /// operator; the next product is then joined to `left` under an `Unknown`
    /// node and parsing continues as if the operator had been there.
    pub(in crate::interpreter::parser) fn sum_tail(&mut self,
                                                   mut left: Option<Expression>)
                                                   -> Option<Expression> {
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                TokenKind::RParen | TokenKind::End => return left,
                _ => BinaryOperator::Unknown,
            };
            self.take_operator(op);
            let right = self.parse_product();
            left = join(op, left, right);
        }
    }

    /// Parses the product level: `product := atom product_tail`.
    pub(in crate::interpreter::parser) fn parse_product(&mut self) -> Option<Expression> {
        let left = self.parse_atom();
        self.product_tail(left)
    }

    /// Folds `*`/`/` operands onto `left` until a sum-level token, `)` or the
    /// end. Missing operators are repaired as in [`Parser::sum_tail`].
    pub(in crate::interpreter::parser) fn product_tail(&mut self,
                                                       mut left: Option<Expression>)
                                                       -> Option<Expression> {
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOperator::Multiply,
                TokenKind::Slash => BinaryOperator::Divide,
                TokenKind::Plus | TokenKind::Minus | TokenKind::RParen | TokenKind::End => {
                    return left;
                },
                _ => BinaryOperator::Unknown,
            };
            self.take_operator(op);
            let right = self.parse_atom();
            left = join(op, left, right);
        }
    }

    /// Consumes the operator token, or reports that one is missing.
    fn take_operator(&mut self, op: BinaryOperator) {
        if op == BinaryOperator::Unknown {
            let position = self.cursor.current().position;
            self.report(Diagnostic::new("Expected operator", position));
        } else {
            self.cursor.advance();
        }
    }
}

/// Builds a binary node if both operands exist.
fn join(op: BinaryOperator,
        left: Option<Expression>,
        right: Option<Expression>)
        -> Option<Expression> {
    Some(Expression::binary(op, left?, right?))
}
