//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use folio_core::{DomainError, FieldErrors};
use folio_shared::ErrorResponse;

/// Message shown to editors when an upload cannot be stored.
const UPLOAD_RETRY: &str = "Upload failed. Please try again.";

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upload(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
            AppError::StoreUnavailable(detail) => {
                tracing::warn!("Store unavailable: {}", detail);
                ErrorResponse::service_unavailable()
            }
            AppError::Upload(detail) => {
                tracing::error!("Upload error: {}", detail);
                ErrorResponse::bad_gateway(UPLOAD_RETRY)
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::StoreUnavailable(msg) => AppError::StoreUnavailable(msg),
            DomainError::Upload(msg) => AppError::Upload(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let mut errors = FieldErrors::new();
        errors.insert("title".into(), "Title is required.".into());

        assert_eq!(AppError::from(DomainError::Validation(errors)).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::from(DomainError::StoreUnavailable("down".into())).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(AppError::from(DomainError::Upload("s3".into())).status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::from(DomainError::Internal("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_names_the_entity() {
        let err = AppError::from(DomainError::post_not_found(uuid::Uuid::nil()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("Post with id"));
    }
}
