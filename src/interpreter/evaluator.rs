use crate::{
    ast::{BinaryOperator, Expression},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Expression {
    /// Reduces the tree to a number.
    ///
    /// Arithmetic follows IEEE-754, so dividing by zero yields an infinity or
    /// NaN rather than an error.
    ///
    /// ## Errors
    /// Returns [`RuntimeError::UnknownOperation`] if the tree contains a node
    /// the parser synthesized for a missing operator.
    ///
    /// ## Example
    /// ```
    /// use calcfront::ast::{BinaryOperator, Expression};
    ///
    /// let quotient = Expression::binary(BinaryOperator::Divide,
    ///                                   Expression::literal(1.0),
    ///                                   Expression::literal(0.0));
    /// assert_eq!(quotient.evaluate(), Ok(f64::INFINITY));
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Literal { value } => Ok(*value),
            Self::BinaryOp { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                match op {
                    BinaryOperator::Add => Ok(left + right),
                    BinaryOperator::Subtract => Ok(left - right),
                    BinaryOperator::Multiply => Ok(left * right),
                    BinaryOperator::Divide => Ok(left / right),
                    BinaryOperator::Unknown => Err(RuntimeError::UnknownOperation),
                }
            },
        }
    }
}
