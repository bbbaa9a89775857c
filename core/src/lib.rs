//! Synchronous API client core for the comments service.
//!
//! # Overview
//! Builds the `GET /comments` request and parses its response without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CommentsClient` is stateless. It holds only `base_url`.
//! - The operation is split into `build_get_comments` (produces request) and
//!   `parse_get_comments` (consumes response), so the I/O boundary is explicit.
//! - `NetworkResult` is the message-only outcome handed to UI code; the
//!   conversion from `Result<_, ApiError>` is the single place failures are
//!   collapsed into strings.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.

pub mod client;
pub mod error;
pub mod http;
pub mod result;
pub mod types;

pub use client::{CommentsClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use result::{NetworkResult, FALLBACK_ERROR_MESSAGE};
pub use types::Comment;
