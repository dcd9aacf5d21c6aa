use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::registry::RegistryError;
use crate::utils::response::error as error_response;

/// Message returned for any malformed or incomplete request.
pub const INVALID_INPUT: &str = "Invalid input";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Empty registry: {0}")]
    EmptyRegistry(String),

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    pub fn invalid_input() -> Self {
        AppError::ValidationError(INVALID_INPUT.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmptyRegistry(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::EmptyRegistry(_) => "EMPTY_REGISTRY",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::EmptyRegistry(msg) => {
                warn!(error = ?self, message = %msg, "Request rejected");
            }
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound(_) => AppError::NotFound(err.to_string()),
            RegistryError::EmptyRegistry => AppError::EmptyRegistry(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(rejection = %rejection.body_text(), "Malformed JSON body");
        AppError::invalid_input()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(rejection = %rejection.body_text(), "Malformed query string");
        AppError::invalid_input()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Internal details stay in the logs
        let public_message = match &self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::EmptyRegistry(msg) => msg.clone(),
            AppError::InternalServerError(_) => "An internal error occurred".to_string(),
        };

        error_response(code, public_message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(status_of(AppError::invalid_input()), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_registry_not_found_maps_to_404() {
        let err = AppError::from(RegistryError::NotFound("abc".to_string()));
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_registry_maps_to_409() {
        let err = AppError::from(RegistryError::EmptyRegistry);
        assert_eq!(err.code(), "EMPTY_REGISTRY");
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        assert_eq!(
            status_of(AppError::InternalServerError("lock poisoned".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
