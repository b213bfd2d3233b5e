//! Shared foundational types used across the rembed resource embedder.
//!
//! This crate provides content hashing, derived resource identifiers, the
//! in-memory view of a resource file, the on-disk output layout, and the
//! per-resource error taxonomy.

#![warn(missing_docs)]

pub mod error;
pub mod hash;
pub mod ident;
pub mod layout;
pub mod resource;

pub use error::ResourceError;
pub use hash::{ContentHash, ParseHashError};
pub use ident::ResourceId;
pub use layout::OutputLayout;
pub use resource::Resource;
