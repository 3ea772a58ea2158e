//! Request types for conversations service.

use crate::services::{bool_param, FormEncode};
use crate::transport::FormRequest;
use crate::types::ChannelId;

/// Request to get conversation info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationInfoRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Include locale info
    pub include_locale: Option<bool>,
    /// Include number of members
    pub include_num_members: Option<bool>,
}

impl ConversationInfoRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            include_locale: None,
            include_num_members: None,
        }
    }

    /// Include locale information
    pub fn include_locale(mut self, include: bool) -> Self {
        self.include_locale = Some(include);
        self
    }

    /// Include member count
    pub fn include_num_members(mut self, include: bool) -> Self {
        self.include_num_members = Some(include);
        self
    }
}

impl FormEncode for ConversationInfoRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("channel", self.channel.as_str())
            .optional_field("include_locale", self.include_locale.map(bool_param))
            .optional_field(
                "include_num_members",
                self.include_num_members.map(bool_param),
            )
    }
}
