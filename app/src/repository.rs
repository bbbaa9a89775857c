//! Repository: the single boundary where failures become values.
//!
//! # Design
//! `CommentsRepositoryImpl` runs the blocking transport on the dispatcher's
//! blocking pool and awaits the join handle, so the calling task suspends
//! without holding a runtime worker. Whatever comes back (data, an
//! `ApiError`, or a panic in the transport) is turned into a
//! `NetworkResult`. Nothing is cached; each call is independent.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;
use comments_core::{Comment, NetworkResult};
use tokio::runtime::Handle;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::transport::CommentsTransport;

#[async_trait]
pub trait CommentsRepository: Send + Sync {
    /// Never fails; every outcome is a `NetworkResult`.
    async fn get_comments(&self) -> NetworkResult<Vec<Comment>>;
}

pub struct CommentsRepositoryImpl {
    transport: Arc<dyn CommentsTransport>,
    dispatcher: Handle,
}

impl CommentsRepositoryImpl {
    pub fn new(transport: Arc<dyn CommentsTransport>, dispatcher: Handle) -> Self {
        Self {
            transport,
            dispatcher,
        }
    }
}

#[async_trait]
impl CommentsRepository for CommentsRepositoryImpl {
    async fn get_comments(&self) -> NetworkResult<Vec<Comment>> {
        let transport = Arc::clone(&self.transport);
        let outcome = self
            .dispatcher
            .spawn_blocking(move || transport.get_comments())
            .await;

        match outcome {
            Ok(Ok(comments)) => {
                debug!(count = comments.len(), "comments loaded");
                NetworkResult::Success(comments)
            }
            Ok(Err(err)) => {
                warn!(error = %err, "comments unavailable");
                NetworkResult::from_failure(err.to_string())
            }
            Err(join_err) => {
                warn!(error = %join_err, "comments task did not complete");
                NetworkResult::from_failure(join_failure_message(join_err))
            }
        }
    }
}

/// Panic payload text, or empty for a cancelled task or a non-string payload.
fn join_failure_message(err: JoinError) -> String {
    if !err.is_panic() {
        return String::new();
    }
    panic_payload_message(err.into_panic().as_ref())
}

fn panic_payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}
