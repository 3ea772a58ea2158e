//! Response types for conversations service.

use crate::types::Channel;
use serde::{Deserialize, Serialize};

/// Response from conversations.info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationInfoResponse {
    /// Channel information
    pub channel: Channel,
}
