//! Calculator Module definition
//!
//! Builds the domain service, wraps it in the local client and exposes the
//! REST routes and OpenAPI document to the host.

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorClientV1;
use utoipa::OpenApi;

use crate::api::rest::openapi::CalculatorApiDoc;
use crate::api::rest::routes;
use crate::client::LocalCalculatorClient;
use crate::domain::Service;

/// Calculator module.
///
/// Owns the client handle shared by every route; cloning the module is cheap.
#[derive(Clone)]
pub struct CalculatorModule {
    client: Arc<dyn CalculatorClientV1>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorModule {
    #[must_use]
    pub fn new() -> Self {
        tracing::info!("Initializing calculator module");
        let service = Arc::new(Service::new());
        let client = Arc::new(LocalCalculatorClient::new(service));
        tracing::info!("calculator module initialized");
        Self { client }
    }

    /// Use an existing client, e.g. a test double.
    #[must_use]
    pub fn with_client(client: Arc<dyn CalculatorClientV1>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClientV1> {
        Arc::clone(&self.client)
    }

    /// Add the calculator REST routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering calculator REST routes");
        routes::register_routes(router, self.client())
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        CalculatorApiDoc::openapi()
    }
}
