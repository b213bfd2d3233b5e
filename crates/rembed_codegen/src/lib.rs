//! C++ source generation for embedded resources.
//!
//! Renders resource bytes into per-resource headers and a single aggregator
//! translation unit that includes them all. Rendering is deterministic: the
//! same bytes and relative path always produce byte-identical output.

#![warn(missing_docs)]

pub mod aggregator;
pub mod error;
pub mod format;
pub mod header;

pub use aggregator::AggregatorGenerator;
pub use error::CodegenError;
pub use format::ByteArrayFormatter;
pub use header::{GeneratedHeader, HeaderGenerator};

/// First line of every generated file.
pub(crate) const PROVENANCE: &str = "/// This file is generated by rembed. Do not edit.";

/// Writes `content` to `path`, mapping failures to [`CodegenError::Io`].
pub(crate) fn write_file(path: &std::path::Path, content: &str) -> Result<(), CodegenError> {
    std::fs::write(path, content).map_err(|e| CodegenError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Escapes a string for use inside a C string literal.
pub(crate) fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Octal escapes stop after three digits; hex escapes would swallow
            // any hex digit that follows.
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
