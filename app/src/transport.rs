//! Blocking transport that executes the core's `HttpRequest` with ureq.
//!
//! # Design
//! The core stays I/O-free; this module is the host half of the
//! host-does-IO split. Calls block the current thread, so the repository
//! runs them on the dispatcher's blocking pool. No recovery happens here:
//! every failure is returned to the caller as an `ApiError`.

use std::time::Duration;

use comments_core::{ApiError, Comment, CommentsClient, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// Source of the comments list.
pub trait CommentsTransport: Send + Sync {
    fn get_comments(&self) -> Result<Vec<Comment>, ApiError>;
}

/// ureq-backed transport for the comments endpoint.
pub struct CommentsApiService {
    client: CommentsClient,
    agent: ureq::Agent,
}

impl CommentsApiService {
    /// `timeout` bounds the whole call, connect through body read.
    pub fn new(client: CommentsClient, timeout: Duration) -> Self {
        // Status codes are data for the core parser, not transport errors.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { client, agent }
    }

    pub fn client(&self) -> &CommentsClient {
        &self.client
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), url = %req.path, "sending request");
        for (name, value) in &req.headers {
            debug!(header = %name, %value, "request header");
        }

        let call = match req.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
        };
        let mut response = call.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        debug!(status, "received response");
        for (name, value) in &headers {
            debug!(header = %name, %value, "response header");
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl CommentsTransport for CommentsApiService {
    fn get_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let req = self.client.build_get_comments();
        let result = self
            .execute(req)
            .and_then(|response| self.client.parse_get_comments(response));
        match &result {
            Ok(comments) => debug!(count = comments.len(), "decoded comments"),
            Err(err) => debug!(error = %err, "comments request failed"),
        }
        result
    }
}
