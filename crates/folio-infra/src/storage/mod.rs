//! Object storage for uploaded media.

mod fs;

pub use fs::FsObjectStore;
