//! Comments list screen: view model plus a text renderer.
//!
//! The view model publishes the latest `NetworkResult` through a `watch`
//! channel. `None` means no result has arrived yet, which the screen shows
//! as loading.

use std::fmt::Write as _;
use std::sync::Arc;

use comments_core::{Comment, NetworkResult};
use tokio::sync::watch;
use tracing::info;

use crate::repository::CommentsRepository;

pub type CommentsResult = NetworkResult<Vec<Comment>>;

/// The three mutually exclusive views of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Loaded(Vec<Comment>),
    Failed(String),
}

impl From<Option<CommentsResult>> for ScreenState {
    fn from(result: Option<CommentsResult>) -> Self {
        match result {
            None => ScreenState::Loading,
            Some(NetworkResult::Success(comments)) => ScreenState::Loaded(comments),
            Some(NetworkResult::Error(message)) => ScreenState::Failed(message),
        }
    }
}

pub struct CommentsViewModel {
    repository: Arc<dyn CommentsRepository>,
    result: watch::Sender<Option<CommentsResult>>,
}

impl CommentsViewModel {
    pub fn new(repository: Arc<dyn CommentsRepository>) -> Self {
        let (result, _) = watch::channel(None);
        Self { repository, result }
    }

    /// Request the list once and publish the outcome.
    pub async fn load(&self) -> ScreenState {
        let result = self.repository.get_comments().await;
        match &result {
            NetworkResult::Success(comments) => info!(count = comments.len(), "showing comments"),
            NetworkResult::Error(message) => info!(%message, "showing error"),
        }
        self.result.send_replace(Some(result.clone()));
        ScreenState::from(Some(result))
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<CommentsResult>> {
        self.result.subscribe()
    }

    pub fn state(&self) -> ScreenState {
        ScreenState::from(self.result.borrow().clone())
    }
}

pub fn render(state: &ScreenState) -> String {
    match state {
        ScreenState::Loading => "Loading comments...".to_string(),
        ScreenState::Failed(message) => message.clone(),
        ScreenState::Loaded(comments) if comments.is_empty() => "No comments".to_string(),
        ScreenState::Loaded(comments) => {
            let mut out = String::new();
            for (i, comment) in comments.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                // Writing to a String cannot fail.
                let _ = writeln!(out, "{}", comment.name);
                let _ = writeln!(out, "  {}", comment.email);
                let _ = writeln!(out, "  {}", comment.body);
            }
            out
        }
    }
}
