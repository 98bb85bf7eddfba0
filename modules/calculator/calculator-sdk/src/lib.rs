//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Operation selectors (`Operation`, `UnaryOperation`)
//! - Result record (`CalculationResult`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Operation};
//!
//! fn sum(client: &dyn CalculatorClientV1) -> Result<f64, calculator_sdk::CalculatorError> {
//!     Ok(client.calculate(Operation::Add, 2.0, 3.0)?.result)
//! }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND ERRORS ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

// === MODELS ===
pub mod models;
pub use models::{CalculationResult, Operation, UnaryOperation, UnknownOperation};
