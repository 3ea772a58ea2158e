//! Resilience patterns for the Slack client.
//!
//! [`RateLimitRetry`] decorates any [`SlackApi`] so every remote call waits
//! out Slack rate limits and retries until it succeeds, fails for another
//! reason, or its context ends.

pub mod retry;

pub use retry::{rate_limit_delay, retry_rate_limited};

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use crate::services::auth_service::AuthTestResponse;
use crate::services::conversations::ConversationInfoRequest;
use crate::services::users::{ListUsersRequest, ListUsersResponse};
use crate::services::usergroups::{
    CreateUsergroupRequest, ListUsergroupsRequest, UpdateUsergroupRequest, UsersUpdateRequest,
};
use crate::types::{Channel, User, Usergroup};
use async_trait::async_trait;

/// Rate-limit retrying decorator over a [`SlackApi`]
#[derive(Debug, Clone)]
pub struct RateLimitRetry<C> {
    inner: C,
}

impl<C: SlackApi> RateLimitRetry<C> {
    /// Wrap `inner`
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped client
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwrap the decorator
    pub fn into_inner(self) -> C {
        self.inner
    }
}

#[async_trait]
impl<C: SlackApi> SlackApi for RateLimitRetry<C> {
    async fn auth_test(&self, ctx: &RequestContext) -> SlackResult<AuthTestResponse> {
        retry_rate_limited(ctx, "auth.test", || self.inner.auth_test(ctx)).await
    }

    async fn user_info(&self, ctx: &RequestContext, user_id: &str) -> SlackResult<User> {
        retry_rate_limited(ctx, "users.info", || self.inner.user_info(ctx, user_id)).await
    }

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> SlackResult<User> {
        retry_rate_limited(ctx, "users.lookupByEmail", || {
            self.inner.user_by_email(ctx, email)
        })
        .await
    }

    async fn list_users_page(
        &self,
        ctx: &RequestContext,
        request: ListUsersRequest,
    ) -> SlackResult<ListUsersResponse> {
        retry_rate_limited(ctx, "users.list", || {
            self.inner.list_users_page(ctx, request.clone())
        })
        .await
    }

    async fn list_usergroups(
        &self,
        ctx: &RequestContext,
        request: ListUsergroupsRequest,
    ) -> SlackResult<Vec<Usergroup>> {
        retry_rate_limited(ctx, "usergroups.list", || {
            self.inner.list_usergroups(ctx, request.clone())
        })
        .await
    }

    async fn conversation_info(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel> {
        retry_rate_limited(ctx, "conversations.info", || {
            self.inner.conversation_info(ctx, request.clone())
        })
        .await
    }

    async fn create_usergroup(
        &self,
        ctx: &RequestContext,
        request: CreateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        retry_rate_limited(ctx, "usergroups.create", || {
            self.inner.create_usergroup(ctx, request.clone())
        })
        .await
    }

    async fn enable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        retry_rate_limited(ctx, "usergroups.enable", || {
            self.inner.enable_usergroup(ctx, id)
        })
        .await
    }

    async fn disable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        retry_rate_limited(ctx, "usergroups.disable", || {
            self.inner.disable_usergroup(ctx, id)
        })
        .await
    }

    async fn update_usergroup(
        &self,
        ctx: &RequestContext,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        retry_rate_limited(ctx, "usergroups.update", || {
            self.inner.update_usergroup(ctx, request.clone())
        })
        .await
    }

    async fn update_usergroup_members(
        &self,
        ctx: &RequestContext,
        request: UsersUpdateRequest,
    ) -> SlackResult<Usergroup> {
        retry_rate_limited(ctx, "usergroups.users.update", || {
            self.inner.update_usergroup_members(ctx, request.clone())
        })
        .await
    }
}
