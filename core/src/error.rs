//! Error types for the resource builder.
//!
//! # Design
//! Placeholder mistakes are caller bugs and get their own variants so they
//! can be matched precisely. Whatever the HTTP client raises is carried in
//! `Transport` untouched; this crate adds no retry or translation. A
//! response body that is not JSON is not an error at all (see `Response`).

use thiserror::Error;

/// Error raised by an `HttpClient` implementation, passed through as-is.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `Resource` operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The name is not a `{placeholder}` of the resource's template.
    #[error("unknown placeholder `{0}`")]
    UnknownPlaceholder(String),

    /// The URL was rendered while some placeholders were still unset.
    #[error("template is incomplete, unset placeholders: {}", missing.join(", "))]
    TemplateIncomplete { missing: Vec<String> },

    /// The underlying HTTP client failed to complete the call.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
