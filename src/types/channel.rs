//! Channel-related types for the Slack API.

use super::ChannelId;
use serde::{Deserialize, Serialize};

/// Slack conversation as returned by `conversations.info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Channel ID
    pub id: ChannelId,
    /// Channel name
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is a channel
    #[serde(default)]
    pub is_channel: bool,
    /// Whether private
    #[serde(default)]
    pub is_private: bool,
    /// Whether archived
    #[serde(default)]
    pub is_archived: bool,
    /// Whether this is the #general channel
    #[serde(default)]
    pub is_general: bool,
    /// Whether shared
    #[serde(default)]
    pub is_shared: bool,
    /// Whether externally shared
    #[serde(default)]
    pub is_ext_shared: bool,
    /// Whether org shared
    #[serde(default)]
    pub is_org_shared: bool,
    /// Creator user ID
    #[serde(default)]
    pub creator: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created: Option<i64>,
    /// Channel topic
    #[serde(default)]
    pub topic: Option<ChannelText>,
    /// Channel purpose
    #[serde(default)]
    pub purpose: Option<ChannelText>,
}

impl Channel {
    /// Topic text, empty when unset
    pub fn topic_text(&self) -> &str {
        self.topic.as_ref().map(|t| t.value.as_str()).unwrap_or("")
    }

    /// Purpose text, empty when unset
    pub fn purpose_text(&self) -> &str {
        self.purpose.as_ref().map(|p| p.value.as_str()).unwrap_or("")
    }
}

/// Topic or purpose of a channel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelText {
    /// Text value
    #[serde(default)]
    pub value: String,
    /// Who set it
    #[serde(default)]
    pub creator: String,
    /// When it was set (Unix timestamp)
    #[serde(default)]
    pub last_set: i64,
}
