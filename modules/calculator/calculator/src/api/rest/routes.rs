//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorClientV1;

use super::handlers;

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `client` - Calculator client the handlers evaluate through
#[must_use]
pub fn register_routes(router: Router, client: Arc<dyn CalculatorClientV1>) -> Router {
    router
        .route("/calculator/v1/evaluate", post(handlers::evaluate))
        .route("/calculator/v1/{operation}", get(handlers::calculate))
        .route("/calculator/v1/square/{x}", get(handlers::square))
        .route("/calculator/v1/sqrt/{x}", get(handlers::sqrt))
        .layer(Extension(client))
}
