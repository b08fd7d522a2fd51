//! Database connection management.

mod connections;
mod unconfigured;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use unconfigured::UnconfiguredStore;

#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresPostRepository, PostgresRedirectRepository, PostgresVersionRepository};

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
