//! Domain-level error types.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

/// Field-addressable validation failures, keyed by the input field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {}", field_list(.0))]
    Validation(FieldErrors),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        Self::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
    }

    /// Single-field validation failure.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), message.into());
        Self::Validation(errors)
    }
}

fn field_list(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Store is not configured")]
    Unavailable,
}

impl RepoError {
    /// Whether the store itself is missing or unreachable, as opposed to a
    /// failed query.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RepoError::Unavailable | RepoError::Connection(_))
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Unavailable => DomainError::StoreUnavailable("store is not configured".into()),
            RepoError::Connection(msg) => DomainError::StoreUnavailable(msg),
            RepoError::NotFound => DomainError::NotFound {
                entity_type: "Entity",
                id: "unknown".into(),
            },
            RepoError::Query(msg) | RepoError::Constraint(msg) => DomainError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.insert("title".into(), "too short".into());
        errors.insert("tags".into(), "too few".into());

        let err = DomainError::Validation(errors);
        assert_eq!(err.to_string(), "Validation failed: tags, title");
    }

    #[test]
    fn unavailable_store_maps_to_store_unavailable() {
        let err: DomainError = RepoError::Unavailable.into();
        assert!(matches!(err, DomainError::StoreUnavailable(_)));
    }
}
