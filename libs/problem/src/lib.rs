//! RFC 9457 Problem Details for HTTP APIs.
//!
//! Every error returned by the calculator HTTP API is rendered as a
//! [`Problem`] with content type `application/problem+json`. The model itself
//! has no HTTP framework dependency; the `axum` feature adds `IntoResponse`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_status_code<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// RFC 9457 Problem Details body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(title = "Problem", description = "RFC 9457 Problem Details for HTTP APIs")
)]
#[must_use]
pub struct Problem {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code, serialized as a number.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    #[cfg_attr(feature = "utoipa", schema(value_type = u16))]
    pub status: StatusCode,
    /// Explanation specific to this occurrence.
    pub detail: String,
    /// Request path the problem occurred on.
    pub instance: String,
    /// Machine-readable error code, e.g. `DIVISION_BY_ZERO`.
    pub code: String,
    /// Id of the tracing span the problem was produced in. Process-local and
    /// reused after the span closes; correlate across hosts with `x-request-id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Offending inputs for 4xx problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Violation {
    /// Field name, e.g. `a` or `operation`.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Problem {
    /// Create a new Problem with the given status, title, and detail.
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
            errors: None,
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<Violation>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Attach the request path and the id of the current tracing span.
    pub fn finalize(self, instance: &str) -> Self {
        let p = self.with_instance(instance);
        match current_span_id() {
            Some(tid) => p.with_trace_id(tid),
            None => p,
        }
    }
}

/// Process-local id of the current tracing span, if any.
#[must_use]
pub fn current_span_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn unprocessable(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
        detail,
    )
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        use axum::http::HeaderValue;

        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_all_fields() {
        let p = bad_request("Cannot divide by zero")
            .with_code("DIVISION_BY_ZERO")
            .with_instance("/calculator/v1/divide")
            .with_trace_id("42")
            .with_errors(vec![Violation::new("b", "must not be zero")]);

        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.title, "Bad Request");
        assert_eq!(p.code, "DIVISION_BY_ZERO");
        assert_eq!(p.instance, "/calculator/v1/divide");
        assert_eq!(p.trace_id.as_deref(), Some("42"));
        assert_eq!(p.errors.unwrap()[0].field, "b");
    }

    #[test]
    fn serializes_status_as_u16_and_skips_empty_options() {
        let p = not_found("Unknown operation 'modulo'");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["type"], "about:blank");
        assert!(json.get("trace_id").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn deserializes_minimal_body() {
        let json = r#"{"type":"about:blank","title":"Bad Request","status":400,"detail":"Cannot divide by zero","instance":"/x","code":"DIVISION_BY_ZERO"}"#;
        let p: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        assert_eq!(p.detail, "Cannot divide by zero");
        assert!(p.trace_id.is_none());
    }

    #[test]
    fn rejects_invalid_status_code() {
        let json = r#"{"type":"about:blank","title":"x","status":42,"detail":"","instance":"","code":""}"#;
        assert!(serde_json::from_str::<Problem>(json).is_err());
    }

    #[test]
    fn finalize_without_span_leaves_trace_id_empty() {
        let p = unprocessable("result is not finite").finalize("/calculator/v1/power");
        assert_eq!(p.instance, "/calculator/v1/power");
        assert!(p.trace_id.is_none());
    }

    #[test]
    fn finalize_inside_span_records_span_id() {
        let subscriber = tracing_subscriber::registry();
        let p = tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("http_request");
            let expected = span.id().map(|id| id.into_u64().to_string());
            let p = span.in_scope(|| bad_request("Cannot divide by zero").finalize("/x"));
            assert_eq!(p.trace_id, expected);
            p
        });
        assert!(p.trace_id.is_some());
        assert_eq!(p.instance, "/x");
    }

    #[test]
    fn convenience_constructors() {
        assert_eq!(bad_request("bad").status, StatusCode::BAD_REQUEST);
        assert_eq!(unprocessable("nan").title, "Unprocessable Entity");
        assert_eq!(not_found("gone").title, "Not Found");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn into_response_sets_status_and_content_type() {
        use axum::response::IntoResponse;

        let resp = bad_request("invalid payload").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }
}
