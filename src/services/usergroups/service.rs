//! Usergroups service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ApiCaller;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for usergroups service operations
#[async_trait]
pub trait UsergroupsServiceTrait: Send + Sync {
    /// Create a usergroup
    async fn create(&self, request: CreateUsergroupRequest) -> SlackResult<UsergroupResponse>;

    /// Disable a usergroup
    async fn disable(&self, request: UsergroupIdRequest) -> SlackResult<UsergroupResponse>;

    /// Enable a usergroup
    async fn enable(&self, request: UsergroupIdRequest) -> SlackResult<UsergroupResponse>;

    /// List all usergroups
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<ListUsergroupsResponse>;

    /// Update a usergroup
    async fn update(&self, request: UpdateUsergroupRequest) -> SlackResult<UsergroupResponse>;

    /// Replace the members of a usergroup
    async fn users_update(&self, request: UsersUpdateRequest) -> SlackResult<UsergroupResponse>;
}

/// Usergroups service implementation
#[derive(Debug, Clone)]
pub struct UsergroupsService {
    caller: ApiCaller,
}

impl UsergroupsService {
    /// Create a new usergroups service
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl UsergroupsServiceTrait for UsergroupsService {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: CreateUsergroupRequest) -> SlackResult<UsergroupResponse> {
        self.caller.call("usergroups.create", &request).await
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn disable(&self, request: UsergroupIdRequest) -> SlackResult<UsergroupResponse> {
        self.caller.call("usergroups.disable", &request).await
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn enable(&self, request: UsergroupIdRequest) -> SlackResult<UsergroupResponse> {
        self.caller.call("usergroups.enable", &request).await
    }

    #[instrument(skip(self))]
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<ListUsergroupsResponse> {
        self.caller.call("usergroups.list", &request).await
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn update(&self, request: UpdateUsergroupRequest) -> SlackResult<UsergroupResponse> {
        self.caller.call("usergroups.update", &request).await
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup, users = request.users.len()))]
    async fn users_update(&self, request: UsersUpdateRequest) -> SlackResult<UsergroupResponse> {
        self.caller.call("usergroups.users.update", &request).await
    }
}
