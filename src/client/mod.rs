//! Slack client implementation.
//!
//! [`SlackApi`] is the remote facade the rest of the crate talks to: one
//! method per Slack operation, each bound to a [`RequestContext`]. It performs
//! no retries and does not interpret error content. [`SlackClientImpl`] is the
//! HTTP-backed implementation.

use crate::auth::AuthManager;
use crate::config::SlackConfig;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use crate::services::auth_service::{AuthService, AuthServiceTrait, AuthTestResponse};
use crate::services::conversations::{
    ConversationInfoRequest, ConversationsService, ConversationsServiceTrait,
};
use crate::services::usergroups::{
    CreateUsergroupRequest, ListUsergroupsRequest, UpdateUsergroupRequest, UsergroupIdRequest,
    UsergroupsService, UsergroupsServiceTrait, UsersUpdateRequest,
};
use crate::services::users::{
    GetUserRequest, ListUsersRequest, ListUsersResponse, LookupByEmailRequest, UsersService,
    UsersServiceTrait,
};
use crate::services::ApiCaller;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Channel, User, Usergroup};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Page size used when walking `users.list`
pub const USERS_PAGE_LIMIT: u32 = 200;

/// Remote operations against a Slack workspace
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Verify the token and return the identity it belongs to
    async fn auth_test(&self, ctx: &RequestContext) -> SlackResult<AuthTestResponse>;

    /// Fetch a user by ID
    async fn user_info(&self, ctx: &RequestContext, user_id: &str) -> SlackResult<User>;

    /// Fetch a user by email address
    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> SlackResult<User>;

    /// One page of `users.list`
    async fn list_users_page(
        &self,
        ctx: &RequestContext,
        request: ListUsersRequest,
    ) -> SlackResult<ListUsersResponse>;

    /// Every user in the workspace, following pagination to the end
    ///
    /// Pages are fetched through [`list_users_page`](Self::list_users_page), so a
    /// wrapper that retries single pages resumes from the current cursor.
    #[instrument(skip(self, ctx))]
    async fn list_users(&self, ctx: &RequestContext) -> SlackResult<Vec<User>> {
        let mut users = Vec::new();
        let mut request = ListUsersRequest::new().limit(USERS_PAGE_LIMIT);

        loop {
            let page = self.list_users_page(ctx, request.clone()).await?;
            let next = page.next_cursor().map(str::to_string);
            users.extend(page.members);

            match next {
                Some(cursor) => {
                    debug!(fetched = users.len(), "Fetching next users page");
                    request = request.cursor(cursor);
                }
                None => break,
            }
        }

        Ok(users)
    }

    /// List usergroups
    async fn list_usergroups(
        &self,
        ctx: &RequestContext,
        request: ListUsergroupsRequest,
    ) -> SlackResult<Vec<Usergroup>>;

    /// Fetch conversation metadata
    async fn conversation_info(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel>;

    /// Create a usergroup
    async fn create_usergroup(
        &self,
        ctx: &RequestContext,
        request: CreateUsergroupRequest,
    ) -> SlackResult<Usergroup>;

    /// Enable a disabled usergroup
    async fn enable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup>;

    /// Disable (soft-delete) a usergroup
    async fn disable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup>;

    /// Update usergroup attributes
    async fn update_usergroup(
        &self,
        ctx: &RequestContext,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<Usergroup>;

    /// Replace the member list of a usergroup
    async fn update_usergroup_members(
        &self,
        ctx: &RequestContext,
        request: UsersUpdateRequest,
    ) -> SlackResult<Usergroup>;
}

/// HTTP-backed Slack client
pub struct SlackClientImpl {
    config: Arc<SlackConfig>,
    auth_service: AuthService,
    users_service: UsersService,
    usergroups_service: UsergroupsService,
    conversations_service: ConversationsService,
}

impl SlackClientImpl {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a new Slack client with a custom transport
    pub fn with_transport(config: SlackConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());
        let caller = ApiCaller::new(transport, auth, config.build_url(""));

        Self {
            auth_service: AuthService::new(caller.clone()),
            users_service: UsersService::new(caller.clone()),
            usergroups_service: UsergroupsService::new(caller.clone()),
            conversations_service: ConversationsService::new(caller),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }
}

impl std::fmt::Debug for SlackClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClientImpl")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl SlackApi for SlackClientImpl {
    async fn auth_test(&self, ctx: &RequestContext) -> SlackResult<AuthTestResponse> {
        ctx.run(self.auth_service.test()).await
    }

    async fn user_info(&self, ctx: &RequestContext, user_id: &str) -> SlackResult<User> {
        let request = GetUserRequest::new(user_id);
        let response = ctx.run(self.users_service.info(request)).await?;
        Ok(response.user)
    }

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> SlackResult<User> {
        let request = LookupByEmailRequest::new(email);
        let response = ctx.run(self.users_service.lookup_by_email(request)).await?;
        Ok(response.user)
    }

    async fn list_users_page(
        &self,
        ctx: &RequestContext,
        request: ListUsersRequest,
    ) -> SlackResult<ListUsersResponse> {
        ctx.run(self.users_service.list(request)).await
    }

    async fn list_usergroups(
        &self,
        ctx: &RequestContext,
        request: ListUsergroupsRequest,
    ) -> SlackResult<Vec<Usergroup>> {
        let response = ctx.run(self.usergroups_service.list(request)).await?;
        Ok(response.usergroups)
    }

    async fn conversation_info(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel> {
        let response = ctx.run(self.conversations_service.info(request)).await?;
        Ok(response.channel)
    }

    async fn create_usergroup(
        &self,
        ctx: &RequestContext,
        request: CreateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        let response = ctx.run(self.usergroups_service.create(request)).await?;
        Ok(response.usergroup)
    }

    async fn enable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        let request = UsergroupIdRequest::new(id);
        let response = ctx.run(self.usergroups_service.enable(request)).await?;
        Ok(response.usergroup)
    }

    async fn disable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        let request = UsergroupIdRequest::new(id);
        let response = ctx.run(self.usergroups_service.disable(request)).await?;
        Ok(response.usergroup)
    }

    async fn update_usergroup(
        &self,
        ctx: &RequestContext,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        let response = ctx.run(self.usergroups_service.update(request)).await?;
        Ok(response.usergroup)
    }

    async fn update_usergroup_members(
        &self,
        ctx: &RequestContext,
        request: UsersUpdateRequest,
    ) -> SlackResult<Usergroup> {
        let response = ctx.run(self.usergroups_service.users_update(request)).await?;
        Ok(response.usergroup)
    }
}

#[async_trait]
impl<T: SlackApi + ?Sized> SlackApi for Arc<T> {
    async fn auth_test(&self, ctx: &RequestContext) -> SlackResult<AuthTestResponse> {
        (**self).auth_test(ctx).await
    }

    async fn user_info(&self, ctx: &RequestContext, user_id: &str) -> SlackResult<User> {
        (**self).user_info(ctx, user_id).await
    }

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> SlackResult<User> {
        (**self).user_by_email(ctx, email).await
    }

    async fn list_users_page(
        &self,
        ctx: &RequestContext,
        request: ListUsersRequest,
    ) -> SlackResult<ListUsersResponse> {
        (**self).list_users_page(ctx, request).await
    }

    async fn list_users(&self, ctx: &RequestContext) -> SlackResult<Vec<User>> {
        (**self).list_users(ctx).await
    }

    async fn list_usergroups(
        &self,
        ctx: &RequestContext,
        request: ListUsergroupsRequest,
    ) -> SlackResult<Vec<Usergroup>> {
        (**self).list_usergroups(ctx, request).await
    }

    async fn conversation_info(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel> {
        (**self).conversation_info(ctx, request).await
    }

    async fn create_usergroup(
        &self,
        ctx: &RequestContext,
        request: CreateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        (**self).create_usergroup(ctx, request).await
    }

    async fn enable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        (**self).enable_usergroup(ctx, id).await
    }

    async fn disable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        (**self).disable_usergroup(ctx, id).await
    }

    async fn update_usergroup(
        &self,
        ctx: &RequestContext,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        (**self).update_usergroup(ctx, request).await
    }

    async fn update_usergroup_members(
        &self,
        ctx: &RequestContext,
        request: UsersUpdateRequest,
    ) -> SlackResult<Usergroup> {
        (**self).update_usergroup_members(ctx, request).await
    }
}
