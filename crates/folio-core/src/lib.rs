//! # Folio Core
//!
//! The domain layer of the Folio blog CMS.
//! This crate contains the post model, content rules and the publishing
//! pipeline, with zero infrastructure dependencies.

pub mod content;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, FieldErrors, RepoError};
