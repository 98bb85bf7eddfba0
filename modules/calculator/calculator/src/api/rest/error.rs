//! Mapping of calculator failures to RFC 9457 problems.

use axum::http::StatusCode;
use calculator_sdk::{CalculatorError, UnknownOperation};
use problem::{Problem, Violation, bad_request, not_found, unprocessable};

pub const DIVISION_BY_ZERO: &str = "DIVISION_BY_ZERO";
pub const NEGATIVE_SQUARE_ROOT: &str = "NEGATIVE_SQUARE_ROOT";
pub const UNKNOWN_OPERATION: &str = "UNKNOWN_OPERATION";
pub const NON_FINITE_OPERAND: &str = "NON_FINITE_OPERAND";
pub const NON_FINITE_RESULT: &str = "NON_FINITE_RESULT";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Map a domain error to a 400 problem.
pub fn calculator_error_to_problem(e: &CalculatorError, instance: &str) -> Problem {
    tracing::debug!(error = %e, instance, "calculation rejected");
    match e {
        CalculatorError::DivisionByZero => bad_request(e.to_string())
            .with_code(DIVISION_BY_ZERO)
            .with_errors(vec![Violation::new("b", "divisor must not be zero")]),
        CalculatorError::NegativeSquareRoot { value } => bad_request(e.to_string())
            .with_code(NEGATIVE_SQUARE_ROOT)
            .with_errors(vec![Violation::new(
                "x",
                format!("{value} is negative"),
            )]),
    }
    .finalize(instance)
}

pub fn unknown_operation_problem(e: &UnknownOperation, instance: &str) -> Problem {
    not_found(format!("Unsupported operation '{}'", e.0))
        .with_code(UNKNOWN_OPERATION)
        .finalize(instance)
}

/// Reject operands that are NaN or infinite. `operands` pairs field names with values.
///
/// # Errors
/// Returns a 400 problem listing every non-finite operand.
pub fn ensure_finite(operands: &[(&str, f64)], instance: &str) -> Result<(), Problem> {
    let violations: Vec<Violation> = operands
        .iter()
        .filter(|(_, v)| !v.is_finite())
        .map(|(field, v)| Violation::new(*field, format!("{v} is not a finite number")))
        .collect();
    if violations.is_empty() {
        return Ok(());
    }
    Err(bad_request("Operands must be finite numbers")
        .with_code(NON_FINITE_OPERAND)
        .with_errors(violations)
        .finalize(instance))
}

/// Reject results that overflowed or are undefined (e.g. `(-8)^(1/3)`).
///
/// # Errors
/// Returns a 422 problem when `result` is NaN or infinite.
pub fn ensure_finite_result(result: f64, instance: &str) -> Result<f64, Problem> {
    if result.is_finite() {
        return Ok(result);
    }
    tracing::debug!(result, instance, "non-finite result");
    Err(
        unprocessable(format!("Result {result} is not representable as a finite number"))
            .with_code(NON_FINITE_RESULT)
            .finalize(instance),
    )
}

/// Map an axum extractor rejection, preserving its status code.
pub fn rejection_problem(status: StatusCode, detail: String, instance: &str) -> Problem {
    Problem::new(
        status,
        status.canonical_reason().unwrap_or("Bad Request"),
        detail,
    )
    .with_code(INVALID_REQUEST)
    .finalize(instance)
}
