//! REST handlers for calculator module
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query};
use axum::{Extension, Json};
use calculator_sdk::{CalculatorClientV1, Operation, UnaryOperation};
use problem::Problem;
use tracing::instrument;

use super::dto::{
    CalculationResultDto, EvaluateRequest, OperandsQuery, UnaryResultDto,
};
use super::error::{
    calculator_error_to_problem, ensure_finite, ensure_finite_result, rejection_problem,
    unknown_operation_problem,
};

/// Handler for GET /calculator/v1/{operation}?a=..&b=..
#[utoipa::path(
    get,
    path = "/calculator/v1/{operation}",
    tag = "calculator",
    operation_id = "calculator.calculate",
    params(
        ("operation" = String, Path, description = "One of add, subtract, multiply, divide, power"),
        OperandsQuery,
    ),
    responses(
        (status = 200, description = "Calculation result", body = CalculationResultDto),
        (status = 400, description = "Division by zero or invalid operands", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown operation", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Result is not a finite number", body = Problem, content_type = "application/problem+json"),
    )
)]
#[instrument(level = "debug", skip_all)]
pub async fn calculate(
    OriginalUri(uri): OriginalUri,
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    operation: Result<Path<String>, PathRejection>,
    operands: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<Json<CalculationResultDto>, Problem> {
    let instance = uri.path();
    let Path(name) =
        operation.map_err(|r| rejection_problem(r.status(), r.body_text(), instance))?;
    let op: Operation = name
        .parse()
        .map_err(|e| unknown_operation_problem(&e, instance))?;
    let Query(OperandsQuery { a, b }) =
        operands.map_err(|r| rejection_problem(r.status(), r.body_text(), instance))?;

    evaluate_binary(client.as_ref(), op, a, b, instance).map(Json)
}

/// Handler for POST /calculator/v1/evaluate
#[utoipa::path(
    post,
    path = "/calculator/v1/evaluate",
    tag = "calculator",
    operation_id = "calculator.evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculationResultDto),
        (status = 400, description = "Division by zero or malformed body", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Unknown operation or non-finite result", body = Problem, content_type = "application/problem+json"),
    )
)]
#[instrument(level = "debug", skip_all)]
pub async fn evaluate(
    OriginalUri(uri): OriginalUri,
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    body: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<CalculationResultDto>, Problem> {
    let instance = uri.path();
    let Json(req) = body.map_err(|r| rejection_problem(r.status(), r.body_text(), instance))?;

    evaluate_binary(client.as_ref(), req.operation.into(), req.a, req.b, instance).map(Json)
}

/// Handler for GET /calculator/v1/square/{x}
#[utoipa::path(
    get,
    path = "/calculator/v1/square/{x}",
    tag = "calculator",
    operation_id = "calculator.square",
    params(("x" = f64, Path, description = "Operand")),
    responses(
        (status = 200, description = "Square of x", body = UnaryResultDto),
        (status = 400, description = "Invalid operand", body = Problem, content_type = "application/problem+json"),
        (status = 422, description = "Result is not a finite number", body = Problem, content_type = "application/problem+json"),
    )
)]
#[instrument(level = "debug", skip_all)]
pub async fn square(
    OriginalUri(uri): OriginalUri,
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    x: Result<Path<f64>, PathRejection>,
) -> Result<Json<UnaryResultDto>, Problem> {
    evaluate_unary(client.as_ref(), UnaryOperation::Square, x, uri.path()).map(Json)
}

/// Handler for GET /calculator/v1/sqrt/{x}
#[utoipa::path(
    get,
    path = "/calculator/v1/sqrt/{x}",
    tag = "calculator",
    operation_id = "calculator.sqrt",
    params(("x" = f64, Path, description = "Operand, must not be negative")),
    responses(
        (status = 200, description = "Square root of x", body = UnaryResultDto),
        (status = 400, description = "Negative or invalid operand", body = Problem, content_type = "application/problem+json"),
    )
)]
#[instrument(level = "debug", skip_all)]
pub async fn sqrt(
    OriginalUri(uri): OriginalUri,
    Extension(client): Extension<Arc<dyn CalculatorClientV1>>,
    x: Result<Path<f64>, PathRejection>,
) -> Result<Json<UnaryResultDto>, Problem> {
    evaluate_unary(client.as_ref(), UnaryOperation::Sqrt, x, uri.path()).map(Json)
}

fn evaluate_binary(
    client: &dyn CalculatorClientV1,
    op: Operation,
    a: f64,
    b: f64,
    instance: &str,
) -> Result<CalculationResultDto, Problem> {
    ensure_finite(&[("a", a), ("b", b)], instance)?;
    let r = client
        .calculate(op, a, b)
        .map_err(|e| calculator_error_to_problem(&e, instance))?;
    ensure_finite_result(r.result, instance)?;
    Ok(CalculationResultDto::new(op, r))
}

fn evaluate_unary(
    client: &dyn CalculatorClientV1,
    op: UnaryOperation,
    x: Result<Path<f64>, PathRejection>,
    instance: &str,
) -> Result<UnaryResultDto, Problem> {
    let Path(x) = x.map_err(|r| rejection_problem(r.status(), r.body_text(), instance))?;
    ensure_finite(&[("x", x)], instance)?;
    let result = client
        .calculate_unary(op, x)
        .map_err(|e| calculator_error_to_problem(&e, instance))?;
    let result = ensure_finite_result(result, instance)?;
    Ok(UnaryResultDto {
        operation: op.into(),
        operand: x,
        result,
    })
}
