//! Auth service for Slack API.
//!
//! Verifies the configured token with `auth.test`.

use super::{ApiCaller, NoParams};
use crate::errors::SlackResult;
use crate::types::{TeamId, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Response from auth.test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTestResponse {
    /// Success indicator
    #[serde(default)]
    pub ok: bool,
    /// URL of the workspace
    #[serde(default)]
    pub url: String,
    /// Team name
    #[serde(default)]
    pub team: String,
    /// User name
    #[serde(default)]
    pub user: String,
    /// Team ID
    pub team_id: TeamId,
    /// User ID
    pub user_id: UserId,
    /// Bot ID (if bot token)
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Enterprise ID
    #[serde(default)]
    pub enterprise_id: Option<String>,
}

/// Trait for auth service operations
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Test authentication
    async fn test(&self) -> SlackResult<AuthTestResponse>;
}

/// Auth service implementation
#[derive(Debug, Clone)]
pub struct AuthService {
    caller: ApiCaller,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    #[instrument(skip(self))]
    async fn test(&self) -> SlackResult<AuthTestResponse> {
        self.caller.call("auth.test", &NoParams).await
    }
}
