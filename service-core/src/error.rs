use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Classified failure kinds for the HTTP boundary.
///
/// Every failure raised below the transport layer is one of these kinds;
/// `IntoResponse` is the single place where a kind becomes a status code
/// and a `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Unauthorized: {detail}")]
    Unauthorized { level: i64, detail: String },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
        }

        let (status, message) = match self {
            AppError::ValidationError(err) => {
                tracing::error!("There was an handled error");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::BadRequest(err) => {
                tracing::error!("There was an handled error");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Unauthorized { level, detail } => {
                tracing::error!(
                    "A level {} user tried to access a restricted resource",
                    level
                );
                (StatusCode::UNAUTHORIZED, detail)
            }
            AppError::InternalError(err) => {
                // The cause stays in the log; callers only see a generic body.
                tracing::error!(error = %err, "There was an unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
