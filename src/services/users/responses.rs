//! Response types for users service.

use crate::types::{ResponseMetadata, User};
use serde::{Deserialize, Serialize};

/// Response from users.info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserResponse {
    /// User info
    pub user: User,
}

/// Response from users.list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    /// List of users
    #[serde(default)]
    pub members: Vec<User>,
    /// Response metadata for pagination
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ListUsersResponse {
    /// Get the next cursor if available
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|m| m.next_cursor.as_deref())
            .filter(|c| !c.is_empty())
    }
}

/// Response from users.lookupByEmail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupByEmailResponse {
    /// User info
    pub user: User,
}
