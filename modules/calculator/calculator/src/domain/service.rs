//! Domain service for calculator
//!
//! Contains the core arithmetic evaluation logic.

use calculator_sdk::{CalculationResult, CalculatorError, Operation, UnaryOperation};
use tracing::debug;

/// Domain service that evaluates arithmetic operations.
///
/// Stateless: every method is a pure function of its arguments, so a single
/// instance is shared behind an `Arc` by the local client and the REST layer.
/// Operands are expected to be finite; callers validate their inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service;

#[allow(clippy::unused_self)]
impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    #[must_use]
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    #[must_use]
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`.
    ///
    /// The divisor is compared to zero exactly, so `-0.0` is rejected too and
    /// tiny non-zero divisors are allowed.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b == 0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Raise `base` to `exponent` with IEEE-754 `pow` semantics.
    #[must_use]
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "performing exponentiation");
        base.powf(exponent)
    }

    #[must_use]
    pub fn square(&self, x: f64) -> f64 {
        debug!(x, "performing square");
        x * x
    }

    /// # Errors
    /// Returns [`CalculatorError::NegativeSquareRoot`] when `x < 0`.
    pub fn sqrt(&self, x: f64) -> Result<f64, CalculatorError> {
        debug!(x, "performing square root");
        if x < 0.0 {
            return Err(CalculatorError::NegativeSquareRoot { value: x });
        }
        Ok(x.sqrt())
    }

    /// Dispatch a binary operation.
    ///
    /// # Errors
    /// Propagates [`CalculatorError::DivisionByZero`] from [`Service::divide`].
    pub fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
            Operation::Power => Ok(self.power(a, b)),
        }
    }

    /// Evaluate a binary operation and package the operands with the result.
    ///
    /// # Errors
    /// Same as [`Service::evaluate`].
    pub fn calculate(
        &self,
        op: Operation,
        a: f64,
        b: f64,
    ) -> Result<CalculationResult, CalculatorError> {
        let result = self.evaluate(op, a, b)?;
        debug!(%op, result, "calculation completed");
        Ok(CalculationResult::new(a, b, result))
    }

    /// Dispatch a unary operation.
    ///
    /// # Errors
    /// Propagates [`CalculatorError::NegativeSquareRoot`] from [`Service::sqrt`].
    pub fn evaluate_unary(&self, op: UnaryOperation, x: f64) -> Result<f64, CalculatorError> {
        match op {
            UnaryOperation::Square => Ok(self.square(x)),
            UnaryOperation::Sqrt => self.sqrt(x),
        }
    }
}
