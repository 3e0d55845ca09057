use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum SiteError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Missing form field `{0}`")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<argon2::password_hash::Error> for SiteError {
    fn from(e: argon2::password_hash::Error) -> Self {
        SiteError::PasswordHash(e.to_string())
    }
}

impl From<figment::Error> for SiteError {
    fn from(e: figment::Error) -> Self {
        SiteError::Config(e.to_string())
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SiteError::MissingField(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            SiteError::Multipart(e) => (e.status(), e.body_text()),
            SiteError::Database(_)
            | SiteError::Io(_)
            | SiteError::PasswordHash(_)
            | SiteError::Config(_) => {
                error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, views::error_page(status, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_client_error() {
        let resp = SiteError::MissingField("title").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_hidden_behind_500() {
        let resp = SiteError::Database(SqlxError::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
