use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::error;

/// Every failure the API maps to a specific status code and JSON body.
///
/// Known kinds are produced at the handler boundary; anything else bubbles
/// up as `Internal` and surfaces as a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),
    #[error("This email is already taken.")]
    DuplicateEmail,
    // Same message for unknown email and wrong password, so a caller cannot
    // probe which one was wrong.
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Refresh token is missing.")]
    MissingRefreshToken,
    // Expired and malformed refresh tokens collapse into one message.
    #[error("Invalid refresh token.")]
    InvalidRefreshToken,
    #[error("Access token is missing")]
    MissingAccessToken,
    #[error("Access token expired")]
    AccessTokenExpired,
    #[error("Invalid access token")]
    InvalidAccessToken,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials
            | ApiError::MissingRefreshToken
            | ApiError::InvalidRefreshToken
            | ApiError::MissingAccessToken
            | ApiError::AccessTokenExpired
            | ApiError::InvalidAccessToken => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(fields) => json!({ "error": fields }),
            ApiError::Internal(e) => {
                error!(error = %e, "unhandled error");
                json!({ "error": e.to_string() })
            }
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::Validation(BTreeMap::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::MissingRefreshToken.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Application").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_body_is_field_map() {
        let mut fields = BTreeMap::new();
        fields.insert("email".to_string(), "Email is required".to_string());
        let response = ApiError::Validation(fields).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["error"]["email"], "Email is required");
    }

    #[tokio::test]
    async fn not_found_names_the_entity() {
        let response = ApiError::NotFound("Application").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["error"], "Application not found");
    }
}
