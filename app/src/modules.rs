//! Object graph assembled once at process start.

use std::sync::Arc;

use comments_core::CommentsClient;
use tokio::runtime::Handle;

use crate::config::AppConfig;
use crate::repository::{CommentsRepository, CommentsRepositoryImpl};
use crate::screen::CommentsViewModel;
use crate::transport::{CommentsApiService, CommentsTransport};

pub struct AppModules {
    pub transport: Arc<dyn CommentsTransport>,
    pub dispatcher: Handle,
    pub repository: Arc<dyn CommentsRepository>,
    pub view_model: CommentsViewModel,
}

impl AppModules {
    pub fn new(config: &AppConfig, dispatcher: Handle) -> Self {
        let client = CommentsClient::new(&config.base_url);
        let transport = Arc::new(CommentsApiService::new(client, config.timeout));
        Self::with_transport(transport, dispatcher)
    }

    /// Wire the graph around an existing transport.
    pub fn with_transport(transport: Arc<dyn CommentsTransport>, dispatcher: Handle) -> Self {
        let repository: Arc<dyn CommentsRepository> = Arc::new(CommentsRepositoryImpl::new(
            Arc::clone(&transport),
            dispatcher.clone(),
        ));
        let view_model = CommentsViewModel::new(Arc::clone(&repository));
        Self {
            transport,
            dispatcher,
            repository,
            view_model,
        }
    }
}

#[cfg(test)]
mod tests {
    use comments_core::{ApiError, Comment, NetworkResult};

    use super::*;
    use crate::screen::ScreenState;

    struct EmptyTransport;

    impl CommentsTransport for EmptyTransport {
        fn get_comments(&self) -> Result<Vec<Comment>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn view_model_and_repository_share_the_transport() {
        let modules = AppModules::with_transport(Arc::new(EmptyTransport), Handle::current());

        assert_eq!(
            modules.repository.get_comments().await,
            NetworkResult::Success(Vec::new())
        );
        assert_eq!(modules.view_model.load().await, ScreenState::Loaded(Vec::new()));
    }
}
