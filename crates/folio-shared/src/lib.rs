//! # Folio Shared
//!
//! Wire types shared between the API server and its editing clients.
//! Kept free of domain dependencies so a client can compile it alone.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
