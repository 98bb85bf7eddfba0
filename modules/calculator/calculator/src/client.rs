//! Local implementation of `CalculatorClientV1`
//!
//! Delegates straight to the in-process domain `Service`.

use std::sync::Arc;

use calculator_sdk::{
    CalculationResult, CalculatorClientV1, CalculatorError, Operation, UnaryOperation,
};

use crate::domain::Service;

/// Local client implementation that delegates to the module's Service.
pub struct LocalCalculatorClient {
    service: Arc<Service>,
}

impl LocalCalculatorClient {
    /// Create a new local client wrapping the Service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClientV1 for LocalCalculatorClient {
    fn calculate(
        &self,
        op: Operation,
        a: f64,
        b: f64,
    ) -> Result<CalculationResult, CalculatorError> {
        self.service.calculate(op, a, b)
    }

    fn calculate_unary(&self, op: UnaryOperation, x: f64) -> Result<f64, CalculatorError> {
        self.service.evaluate_unary(op, x)
    }
}
