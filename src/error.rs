use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Authentication errors, all request-scoped
#[derive(Error, Debug)]
pub enum AuthError {
    /// Submitted credential pair does not match the configured identity
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No `token` cookie attached to the request
    #[error("Unauthorized")]
    Unauthenticated,

    /// Token cookie present but unverifiable: bad signature, expired, or malformed
    #[error("Invalid token")]
    InvalidToken,

    /// Signing the session token failed
    #[error("Token creation error: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AuthError::TokenCreation(e) => {
                tracing::error!(error = %e, "Failed to sign session token");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
