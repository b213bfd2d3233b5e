//! Incremental resource embedding driver.
//!
//! Ties the fingerprint store and the generators together: expands resource
//! specs into files, regenerates headers only for stale resources, and
//! rewrites the aggregator once at the end if anything changed. A second run
//! over unchanged inputs performs no writes at all.

#![warn(missing_docs)]

pub mod discover;
pub mod driver;
pub mod error;
pub mod report;

pub use discover::{expand_specs, Discovery};
pub use driver::Embedder;
pub use error::EmbedError;
pub use report::{GeneratedEntry, ResourceFailure, RunReport, StatusEntry};
