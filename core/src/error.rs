//! Error types for the comments API client.
//!
//! # Design
//! Variants keep the structured cause (status code, decoder message) so the
//! layers below the repository can log it. The repository and the C ABI only
//! surface the `Display` string.

use thiserror::Error;

/// Errors produced while fetching or decoding comments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into comments.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("{0}")]
    Transport(String),
}
