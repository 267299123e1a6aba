use std::fmt;

/// The operator of a [`Expression::BinaryOp`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// Placeholder inserted by the parser where two operands appear with no
    /// operator between them. Evaluating it always fails.
    Unknown,
}

impl BinaryOperator {
    /// Gets the symbol used when displaying the operator; `?` for
    /// [`BinaryOperator::Unknown`].
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Unknown => '?',
        }
    }
}

/// A numeric expression tree.
///
/// Children are owned exclusively by their parent, so a tree has no sharing
/// and no cycles. The parser builds trees bottom-up and never mutates them
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric constant.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expression {
    /// Creates a leaf node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Creates a binary node owning both operands.
    ///
    /// ## Example
    /// ```
    /// use calcfront::ast::{BinaryOperator, Expression};
    ///
    /// let sum = Expression::binary(BinaryOperator::Add,
    ///                              Expression::literal(1.0),
    ///                              Expression::literal(2.0));
    /// assert_eq!(sum.to_string(), "(1.0 + 2.0)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` if the tree contains a [`BinaryOperator::Unknown`] node.
    #[must_use]
    pub fn contains_unknown(&self) -> bool {
        match self {
            Self::Literal { .. } => false,
            Self::BinaryOp { op: BinaryOperator::Unknown, .. } => true,
            Self::BinaryOp { left, right, .. } => left.contains_unknown() || right.contains_unknown(),
        }
    }
}

/// Renders the tree fully parenthesised, e.g. `((5.0 ? 6.0) * 8.0)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value:?}"),
            Self::BinaryOp { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            },
        }
    }
}
