//! Metadata of a single conversation.

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use crate::services::conversations::ConversationInfoRequest;
use crate::types::Channel;
use tracing::{instrument, trace};

/// Flattened conversation data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationSummary {
    /// Channel ID
    pub id: String,
    /// Topic text
    pub topic: String,
    /// Purpose text
    pub purpose: String,
    /// Creation time, unix seconds
    pub created: i64,
    /// Creator user ID
    pub creator: String,
    /// Archived
    pub is_archived: bool,
    /// Shared with another workspace
    pub is_shared: bool,
    /// Shared with an external organization
    pub is_ext_shared: bool,
    /// Shared across an Enterprise Grid org
    pub is_org_shared: bool,
    /// The workspace's #general channel
    pub is_general: bool,
}

impl From<&Channel> for ConversationSummary {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            topic: channel.topic_text().to_string(),
            purpose: channel.purpose_text().to_string(),
            created: channel.created.unwrap_or_default(),
            creator: channel.creator.clone().unwrap_or_default(),
            is_archived: channel.is_archived,
            is_shared: channel.is_shared,
            is_ext_shared: channel.is_ext_shared,
            is_org_shared: channel.is_org_shared,
            is_general: channel.is_general,
        }
    }
}

/// Fetch a conversation's metadata
#[instrument(skip(ctx, client))]
pub async fn read_conversation(
    ctx: &RequestContext,
    client: &dyn SlackApi,
    channel_id: &str,
) -> SlackResult<ConversationSummary> {
    let request = ConversationInfoRequest::new(channel_id)
        .include_locale(false)
        .include_num_members(false);

    let channel = client
        .conversation_info(ctx, request)
        .await
        .map_err(|e| e.context(format!("could not get conversation info for channel {channel_id}")))?;

    trace!(channel_id = %channel.id, "Fetched Slack channel");
    Ok(ConversationSummary::from(&channel))
}
