//! Calculator API trait and types
//!
//! Contract trait and error type for the calculator service.

use crate::models::{CalculationResult, Operation, UnaryOperation};

/// Calculator API trait
///
/// Stateless arithmetic over finite `f64` operands. Implementations must be
/// safe to share across threads; every call is independent.
pub trait CalculatorClientV1: Send + Sync {
    /// Evaluate a binary operation and return the full result record.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `op` is
    /// [`Operation::Divide`] and `b` is exactly zero.
    fn calculate(
        &self,
        op: Operation,
        a: f64,
        b: f64,
    ) -> Result<CalculationResult, CalculatorError>;

    /// Evaluate a unary operation.
    ///
    /// # Errors
    /// Returns [`CalculatorError::NegativeSquareRoot`] when `op` is
    /// [`UnaryOperation::Sqrt`] and `x` is negative.
    fn calculate_unary(&self, op: UnaryOperation, x: f64) -> Result<f64, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculatorError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot take square root of a negative number")]
    NegativeSquareRoot { value: f64 },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
        assert_eq!(
            CalculatorError::NegativeSquareRoot { value: -9.0 }.to_string(),
            "Cannot take square root of a negative number"
        );
    }

    #[test]
    fn trait_is_object_safe() {
        fn assert_object(_: Option<&dyn CalculatorClientV1>) {}
        assert_object(None);
    }
}
