//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::{CalculationResult, Operation, UnaryOperation};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Binary operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OperationDto {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl From<OperationDto> for Operation {
    fn from(op: OperationDto) -> Self {
        match op {
            OperationDto::Add => Operation::Add,
            OperationDto::Subtract => Operation::Subtract,
            OperationDto::Multiply => Operation::Multiply,
            OperationDto::Divide => Operation::Divide,
            OperationDto::Power => Operation::Power,
        }
    }
}

impl From<Operation> for OperationDto {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => OperationDto::Add,
            Operation::Subtract => OperationDto::Subtract,
            Operation::Multiply => OperationDto::Multiply,
            Operation::Divide => OperationDto::Divide,
            Operation::Power => OperationDto::Power,
        }
    }
}

/// Unary operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOperationDto {
    Square,
    Sqrt,
}

impl From<UnaryOperation> for UnaryOperationDto {
    fn from(op: UnaryOperation) -> Self {
        match op {
            UnaryOperation::Square => UnaryOperationDto::Square,
            UnaryOperation::Sqrt => UnaryOperationDto::Sqrt,
        }
    }
}

/// Operands passed as query parameters, e.g. `?a=2&b=3`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperandsQuery {
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// Request to evaluate a binary operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluateRequest {
    pub operation: OperationDto,
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// Result of a binary operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationResultDto {
    pub operation: OperationDto,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

impl CalculationResultDto {
    #[must_use]
    pub fn new(op: Operation, r: CalculationResult) -> Self {
        Self {
            operation: op.into(),
            operand1: r.operand1,
            operand2: r.operand2,
            result: r.result,
        }
    }
}

/// Result of a unary operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnaryResultDto {
    pub operation: UnaryOperationDto,
    pub operand: f64,
    pub result: f64,
}
