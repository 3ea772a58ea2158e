//! Conversations service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ApiCaller;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for conversations service operations
#[async_trait]
pub trait ConversationsServiceTrait: Send + Sync {
    /// Get information about a conversation
    async fn info(&self, request: ConversationInfoRequest)
        -> SlackResult<ConversationInfoResponse>;
}

/// Conversations service implementation
#[derive(Debug, Clone)]
pub struct ConversationsService {
    caller: ApiCaller,
}

impl ConversationsService {
    /// Create a new conversations service
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl ConversationsServiceTrait for ConversationsService {
    #[instrument(skip(self), fields(channel = %request.channel))]
    async fn info(
        &self,
        request: ConversationInfoRequest,
    ) -> SlackResult<ConversationInfoResponse> {
        self.caller.call("conversations.info", &request).await
    }
}
