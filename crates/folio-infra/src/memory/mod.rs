//! In-memory stores.
//!
//! Used by `FOLIO_STORE=memory` and by the service-level tests. Records are
//! cloned in and out, so callers never share state with the store.

mod posts;
mod history;

pub use history::{InMemoryRedirectRepository, InMemoryVersionRepository};
pub use posts::InMemoryPostRepository;
