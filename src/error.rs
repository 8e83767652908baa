use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures a request handler does not recover from. Every variant surfaces
/// to the client as a bare 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed post body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MalformedBody(e) => tracing::error!("Rejected request body: {}", e),
            ApiError::Store(e) => tracing::error!("Store error: {:#}", e),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
