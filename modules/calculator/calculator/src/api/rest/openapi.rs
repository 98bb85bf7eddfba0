//! OpenAPI document for the calculator REST API.

use problem::{Problem, Violation};
use utoipa::OpenApi;

use super::dto::{
    CalculationResultDto, EvaluateRequest, OperationDto, UnaryOperationDto, UnaryResultDto,
};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator API", description = "Arithmetic evaluation service"),
    paths(handlers::calculate, handlers::evaluate, handlers::square, handlers::sqrt),
    components(schemas(
        OperationDto,
        UnaryOperationDto,
        EvaluateRequest,
        CalculationResultDto,
        UnaryResultDto,
        Problem,
        Violation
    )),
    tags((name = "calculator", description = "Binary and unary arithmetic operations"))
)]
pub struct CalculatorApiDoc;
