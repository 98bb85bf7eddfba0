//! Router assembly and the HTTP serve loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, StatusCode};
use axum::routing::get;
use axum::{Extension, Router};
use calculator::CalculatorModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;
use crate::web;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Build the full application router: host endpoints, calculator routes and middleware.
#[must_use]
pub fn build_router(config: &ServerConfig, calculator: &CalculatorModule) -> Router {
    let router = Router::new()
        .route("/", get(web::root))
        .route("/health", get(web::health_check))
        .route("/openapi.json", get(web::openapi_json))
        .layer(Extension(Arc::new(calculator.openapi())));

    let router = calculator.register_rest(router);
    apply_middleware_stack(router, config)
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: std::time::Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    )
}

/// Layers are registered innermost first, so the request passes through
/// `SetRequestId` → `PropagateRequestId` → Trace → Timeout → `BodyLimit` → CORS → Router.
fn apply_middleware_stack(mut router: Router, config: &ServerConfig) -> Router {
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router = router.layer(RequestBodyLimitLayer::new(config.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(config.body_limit_bytes));

    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        config.request_timeout(),
    ));

    router = apply_trace_layer(router);

    router = router.layer(PropagateRequestIdLayer::new(request_id_header()));
    router.layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
}

/// Bind `config.bind_addr` and serve until `cancel` fires.
///
/// # Errors
/// Returns an error if the address is invalid, binding fails, or the server fails.
pub async fn serve(config: &ServerConfig, router: Router, cancel: CancellationToken) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(listener, router, cancel).await
}

/// Serve on an already bound listener until `cancel` fires.
///
/// # Errors
/// Returns an error if the server fails.
pub async fn serve_on(
    listener: TcpListener,
    router: Router,
    cancel: CancellationToken,
) -> Result<()> {
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}
