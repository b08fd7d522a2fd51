//! SeaORM entities backing the post stores.

pub mod post;
pub mod post_version;
pub mod redirect;
