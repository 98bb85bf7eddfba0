//! Host-level endpoints: welcome message, health probe, OpenAPI document.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;
use utoipa::openapi::OpenApi;

pub const WELCOME_MESSAGE: &str = "Welcome to the calculator service!";

#[derive(Debug, Serialize)]
pub struct WelcomeDto {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

pub async fn root() -> Json<WelcomeDto> {
    Json(WelcomeDto {
        message: WELCOME_MESSAGE,
    })
}

pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto { status: "ok" })
}

pub async fn openapi_json(Extension(doc): Extension<Arc<OpenApi>>) -> Json<OpenApi> {
    Json(doc.as_ref().clone())
}
