//! Operation selectors and the calculation result record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }
}

/// Unary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOperation {
    Square,
    Sqrt,
}

impl UnaryOperation {
    pub const ALL: [UnaryOperation; 2] = [UnaryOperation::Square, UnaryOperation::Sqrt];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOperation::Square => "square",
            UnaryOperation::Sqrt => "sqrt",
        }
    }
}

/// Returned when parsing an operation name that is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

impl FromStr for UnaryOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnaryOperation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

/// Outcome of a successful binary evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

impl CalculationResult {
    #[must_use]
    pub const fn new(operand1: f64, operand2: f64, result: f64) -> Self {
        Self {
            operand1,
            operand2,
            result,
        }
    }
}
