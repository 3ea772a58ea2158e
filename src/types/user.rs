//! User-related types for the Slack API.

use super::{TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Slack user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Team ID
    #[serde(default)]
    pub team_id: Option<TeamId>,
    /// Username
    #[serde(default)]
    pub name: String,
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Whether deleted/deactivated
    #[serde(default)]
    pub deleted: bool,
    /// User profile
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Whether admin
    #[serde(default)]
    pub is_admin: bool,
    /// Whether bot
    #[serde(default)]
    pub is_bot: bool,
    /// Whether app user
    #[serde(default)]
    pub is_app_user: bool,
    /// Updated timestamp
    #[serde(default)]
    pub updated: Option<i64>,
}

impl User {
    /// Active human account: neither deactivated nor a bot
    pub fn is_active_human(&self) -> bool {
        !self.deleted && !self.is_bot
    }

    /// Get the user's email if available
    pub fn email(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.email.as_deref())
    }
}

/// User profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    /// Real name
    #[serde(default)]
    pub real_name: Option<String>,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Email
    #[serde(default)]
    pub email: Option<String>,
}
