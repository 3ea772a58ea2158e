//! Users service implementation.

use super::*;
use crate::errors::SlackResult;
use crate::services::ApiCaller;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for users service operations
#[async_trait]
pub trait UsersServiceTrait: Send + Sync {
    /// Get information about a user
    async fn info(&self, request: GetUserRequest) -> SlackResult<GetUserResponse>;

    /// List one page of users in a workspace
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse>;

    /// Look up a user by email
    async fn lookup_by_email(
        &self,
        request: LookupByEmailRequest,
    ) -> SlackResult<LookupByEmailResponse>;
}

/// Users service implementation
#[derive(Debug, Clone)]
pub struct UsersService {
    caller: ApiCaller,
}

impl UsersService {
    /// Create a new users service
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl UsersServiceTrait for UsersService {
    #[instrument(skip(self), fields(user = %request.user))]
    async fn info(&self, request: GetUserRequest) -> SlackResult<GetUserResponse> {
        self.caller.call("users.info", &request).await
    }

    #[instrument(skip(self), fields(has_cursor = request.cursor.is_some()))]
    async fn list(&self, request: ListUsersRequest) -> SlackResult<ListUsersResponse> {
        self.caller.call("users.list", &request).await
    }

    #[instrument(skip(self, request))]
    async fn lookup_by_email(
        &self,
        request: LookupByEmailRequest,
    ) -> SlackResult<LookupByEmailResponse> {
        self.caller.call("users.lookupByEmail", &request).await
    }
}
