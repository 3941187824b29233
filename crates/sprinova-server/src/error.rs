use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gemini_client::GeminiError;
use sprinova_core::SiteError;

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 503 Service Unavailable errors
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 503 through
/// the `anyhow::Error` chain without touching the `SiteError` enum.
#[derive(Debug)]
struct UnavailableError(String);

impl std::fmt::Display for UnavailableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnavailableError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 503 Service Unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self(UnavailableError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnavailableError>() {
            let body = serde_json::json!({ "error": u.0.clone() });
            return (StatusCode::SERVICE_UNAVAILABLE, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<SiteError>() {
            match e {
                SiteError::NotInitialized
                | SiteError::InvalidInput { .. }
                | SiteError::UnknownContentType(_) => StatusCode::BAD_REQUEST,
                SiteError::Io(_) | SiteError::Yaml(_) | SiteError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else if let Some(e) = self.0.downcast_ref::<GeminiError>() {
            match e {
                GeminiError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
                GeminiError::Api { .. } | GeminiError::EmptyResponse | GeminiError::Http(_) => {
                    StatusCode::BAD_GATEWAY
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
