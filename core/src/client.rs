//! Stateless HTTP request builder and response parser for the comments API.
//!
//! # Design
//! `CommentsClient` holds only a `base_url` and carries no mutable state
//! between calls. `build_get_comments` produces an `HttpRequest` and
//! `parse_get_comments` consumes the matching `HttpResponse`. The caller
//! executes the actual HTTP round-trip, keeping the core deterministic and
//! free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Comment;

/// Public endpoint the client targets unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless client for the comments API.
#[derive(Debug, Clone)]
pub struct CommentsClient {
    base_url: String,
}

impl CommentsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_get_comments(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/comments", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Decode a `/comments` response. Any 2xx status is accepted.
    pub fn parse_get_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        check_status(&response)?;
        decode_body(&response.body)
    }
}

impl Default for CommentsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode_body(body: &str) -> Result<Vec<Comment>, ApiError> {
    // Some proxies prepend a byte-order mark.
    let body = body.trim_start_matches('\u{feff}').trim();
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
