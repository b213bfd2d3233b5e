//! Fingerprint records for incremental resource embedding.
//!
//! This crate stores one content hash per embedded resource next to the
//! generated headers and answers the only question the driver asks of it:
//! does this resource need its header regenerated?

#![warn(missing_docs)]

pub mod error;
pub mod store;

pub use error::CacheError;
pub use store::{HashStore, Staleness};
