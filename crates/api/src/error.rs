//! API error types with HTTP response mapping.
//!
//! Every failure this service can report is bad client input, so every
//! variant maps to `400 Bad Request` with a `{"error": "..."}` body.

use std::any::Any;

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::CoordinateError;
use domain::{CalendarError, DomainError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Domain validation error.
    Domain(DomainError),
}

impl ApiError {
    /// Builds the error reported when a handler panics.
    pub fn from_panic(panic: Box<dyn Any + Send + 'static>) -> Self {
        let message = if let Some(msg) = panic.downcast_ref::<String>() {
            msg.clone()
        } else if let Some(msg) = panic.downcast_ref::<&str>() {
            (*msg).to_string()
        } else {
            "unexpected error while handling request".to_string()
        };
        tracing::error!(error = %message, "handler panicked");
        ApiError::BadRequest(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Domain(err) => err.to_string(),
        };

        metrics::counter!("client_errors_total").increment(1);
        tracing::debug!(error = %message, "rejecting request");

        let body = serde_json::json!({ "error": message });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<CalendarError> for ApiError {
    fn from(err: CalendarError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<CoordinateError> for ApiError {
    fn from(err: CoordinateError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Response for a panicking handler, used by `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::from_panic(panic).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn domain_errors_are_bad_requests() {
        let err: ApiError = CalendarError::UnknownTimezone("Nowhere".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "unknown timezone 'Nowhere'" })
        );
    }

    #[tokio::test]
    async fn panics_keep_their_message() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "boom");

        let response = panic_response(Box::new(String::from("owned boom")));
        assert_eq!(body_json(response).await["error"], "owned boom");

        let response = panic_response(Box::new(42_u8));
        assert_eq!(
            body_json(response).await["error"],
            "unexpected error while handling request"
        );
    }
}
