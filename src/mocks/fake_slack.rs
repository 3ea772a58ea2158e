//! In-memory Slack workspace implementing [`SlackApi`].

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::{RateLimitError, SlackError, SlackResult, UsergroupApiError};
use crate::fixtures;
use crate::services::auth_service::AuthTestResponse;
use crate::services::conversations::ConversationInfoRequest;
use crate::services::users::{ListUsersRequest, ListUsersResponse};
use crate::services::usergroups::{
    CreateUsergroupRequest, ListUsergroupsRequest, UpdateUsergroupRequest, UsersUpdateRequest,
};
use crate::types::{Channel, User, Usergroup};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

const MUTATING_METHODS: [&str; 5] = [
    "usergroups.create",
    "usergroups.enable",
    "usergroups.disable",
    "usergroups.update",
    "usergroups.users.update",
];

/// One call received by [`FakeSlack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCall {
    /// Slack method name, e.g. `usergroups.create`
    pub method: String,
    /// Usergroup/user/channel the call was about, when it names one
    pub target: Option<String>,
}

impl FakeCall {
    /// Whether the call changes workspace state
    pub fn is_mutation(&self) -> bool {
        MUTATING_METHODS.contains(&self.method.as_str())
    }
}

#[derive(Default)]
struct FakeState {
    usergroups: Vec<Usergroup>,
    users: Vec<User>,
    channels: Vec<Channel>,
    scripted: HashMap<String, VecDeque<SlackError>>,
    calls: Vec<FakeCall>,
    next_id: u32,
}

impl FakeState {
    fn group_mut(&mut self, id: &str) -> SlackResult<&mut Usergroup> {
        self.usergroups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| no_such_subteam(id))
    }

    /// Slack keeps names and handles reserved by disabled groups too
    fn check_unique(&self, except: Option<&str>, name: &str, handle: &str) -> SlackResult<()> {
        let others = || self.usergroups.iter().filter(|g| Some(g.id.as_str()) != except);

        if !name.is_empty() && others().any(|g| g.name.to_lowercase() == name.to_lowercase()) {
            return Err(UsergroupApiError::NameAlreadyExists.into());
        }
        if !handle.is_empty() && others().any(|g| g.handle.to_lowercase() == handle.to_lowercase())
        {
            return Err(UsergroupApiError::HandleAlreadyExists.into());
        }
        Ok(())
    }
}

fn no_such_subteam(id: &str) -> SlackError {
    SlackError::from_slack_error("no_such_subteam", Some(&format!("no usergroup {id}")))
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Fake Slack workspace.
///
/// Follows the Slack rules the reconciliation logic depends on: names and
/// handles are unique across enabled and disabled groups, enabling an
/// enabled group fails with `already_enabled`, and disabling keeps the group
/// around. Failures can be scripted per method and every call is logged.
pub struct FakeSlack {
    identity: AuthTestResponse,
    state: Mutex<FakeState>,
}

impl FakeSlack {
    /// Empty workspace
    pub fn new() -> Self {
        Self {
            identity: fixtures::auth_test_response(),
            state: Mutex::new(FakeState::default()),
        }
    }

    /// Seed a usergroup
    pub fn with_usergroup(self, group: Usergroup) -> Self {
        self.state.lock().usergroups.push(group);
        self
    }

    /// Seed a user
    pub fn with_user(self, user: User) -> Self {
        self.state.lock().users.push(user);
        self
    }

    /// Seed a channel
    pub fn with_channel(self, channel: Channel) -> Self {
        self.state.lock().channels.push(channel);
        self
    }

    /// Fail the next call to `method` with a rate limit asking to wait `retry_after`
    pub fn rate_limit_next(&self, method: &str, retry_after: Duration) {
        self.fail_next(
            method,
            RateLimitError::RateLimited {
                retry_after,
                tier: None,
            }
            .into(),
        );
    }

    /// Fail the next call to `method` with `error`; repeated calls queue up
    pub fn fail_next(&self, method: &str, error: SlackError) {
        self.state
            .lock()
            .scripted
            .entry(method.to_string())
            .or_default()
            .push_back(error);
    }

    /// Every call received so far, scripted failures included
    pub fn calls(&self) -> Vec<FakeCall> {
        self.state.lock().calls.clone()
    }

    /// Calls to `method`
    pub fn calls_to(&self, method: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Calls that change usergroups
    pub fn mutation_calls(&self) -> Vec<FakeCall> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.is_mutation())
            .cloned()
            .collect()
    }

    /// Forget the call log
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Snapshot of every usergroup, disabled ones included
    pub fn usergroups(&self) -> Vec<Usergroup> {
        self.state.lock().usergroups.clone()
    }

    /// Snapshot of one usergroup
    pub fn usergroup(&self, id: &str) -> Option<Usergroup> {
        self.state
            .lock()
            .usergroups
            .iter()
            .find(|g| g.id == id)
            .cloned()
    }

    fn begin(&self, ctx: &RequestContext, method: &str, target: Option<&str>) -> SlackResult<()> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let mut state = self.state.lock();
        state.calls.push(FakeCall {
            method: method.to_string(),
            target: target.map(String::from),
        });

        match state.scripted.get_mut(method).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for FakeSlack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FakeSlack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FakeSlack")
            .field("usergroups", &state.usergroups.len())
            .field("users", &state.users.len())
            .field("calls", &state.calls.len())
            .finish()
    }
}

#[async_trait]
impl SlackApi for FakeSlack {
    async fn auth_test(&self, ctx: &RequestContext) -> SlackResult<AuthTestResponse> {
        self.begin(ctx, "auth.test", None)?;
        Ok(self.identity.clone())
    }

    async fn user_info(&self, ctx: &RequestContext, user_id: &str) -> SlackResult<User> {
        self.begin(ctx, "users.info", Some(user_id))?;
        self.state
            .lock()
            .users
            .iter()
            .find(|u| u.id.as_str() == user_id)
            .cloned()
            .ok_or_else(|| SlackError::from_slack_error("user_not_found", None))
    }

    async fn user_by_email(&self, ctx: &RequestContext, email: &str) -> SlackResult<User> {
        self.begin(ctx, "users.lookupByEmail", Some(email))?;
        self.state
            .lock()
            .users
            .iter()
            .find(|u| u.email().is_some_and(|e| e.eq_ignore_ascii_case(email)))
            .cloned()
            .ok_or_else(|| SlackError::from_slack_error("users_not_found", None))
    }

    async fn list_users_page(
        &self,
        ctx: &RequestContext,
        _request: ListUsersRequest,
    ) -> SlackResult<ListUsersResponse> {
        self.begin(ctx, "users.list", None)?;
        Ok(ListUsersResponse {
            members: self.state.lock().users.clone(),
            response_metadata: None,
        })
    }

    async fn list_usergroups(
        &self,
        ctx: &RequestContext,
        request: ListUsergroupsRequest,
    ) -> SlackResult<Vec<Usergroup>> {
        self.begin(ctx, "usergroups.list", None)?;

        let include_disabled = request.include_disabled.unwrap_or(false);
        let include_users = request.include_users.unwrap_or(false);

        Ok(self
            .state
            .lock()
            .usergroups
            .iter()
            .filter(|g| include_disabled || g.is_enabled())
            .map(|g| {
                let mut group = g.clone();
                if !include_users {
                    group.users.clear();
                }
                group
            })
            .collect())
    }

    async fn conversation_info(
        &self,
        ctx: &RequestContext,
        request: ConversationInfoRequest,
    ) -> SlackResult<Channel> {
        self.begin(ctx, "conversations.info", Some(request.channel.as_str()))?;
        self.state
            .lock()
            .channels
            .iter()
            .find(|c| c.id == request.channel)
            .cloned()
            .ok_or_else(|| SlackError::from_slack_error("channel_not_found", None))
    }

    async fn create_usergroup(
        &self,
        ctx: &RequestContext,
        request: CreateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        self.begin(ctx, "usergroups.create", Some(&request.name))?;

        let mut state = self.state.lock();
        let handle = request.handle.unwrap_or_default();
        state.check_unique(None, &request.name, &handle)?;

        state.next_id += 1;
        let created = now();
        let group = Usergroup {
            id: format!("SFAKE{:04}", state.next_id),
            team_id: self.identity.team_id.to_string(),
            is_usergroup: true,
            name: request.name,
            description: request.description.unwrap_or_default(),
            handle,
            created_by: Some(self.identity.user_id.to_string()),
            prefs: crate::types::UsergroupPrefs {
                channels: request.channels,
                groups: Vec::new(),
            },
            user_count: Some(0),
            date_create: created,
            date_update: created,
            ..Default::default()
        };
        state.usergroups.push(group.clone());
        Ok(group)
    }

    async fn enable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        self.begin(ctx, "usergroups.enable", Some(id))?;

        let mut state = self.state.lock();
        let group = state.group_mut(id)?;
        if group.is_enabled() {
            return Err(UsergroupApiError::AlreadyEnabled.into());
        }
        group.date_delete = 0;
        group.deleted_by = None;
        group.date_update = now();
        Ok(group.clone())
    }

    async fn disable_usergroup(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        self.begin(ctx, "usergroups.disable", Some(id))?;

        let user_id = self.identity.user_id.to_string();
        let mut state = self.state.lock();
        let group = state.group_mut(id)?;
        if group.is_enabled() {
            group.date_delete = now().max(1);
            group.deleted_by = Some(user_id);
        }
        Ok(group.clone())
    }

    async fn update_usergroup(
        &self,
        ctx: &RequestContext,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<Usergroup> {
        self.begin(ctx, "usergroups.update", Some(&request.usergroup))?;

        let mut state = self.state.lock();
        state.group_mut(&request.usergroup)?;
        state.check_unique(
            Some(&request.usergroup),
            request.name.as_deref().unwrap_or_default(),
            request.handle.as_deref().unwrap_or_default(),
        )?;

        let group = state.group_mut(&request.usergroup)?;
        if let Some(name) = request.name {
            group.name = name;
        }
        if let Some(handle) = request.handle {
            group.handle = handle;
        }
        if let Some(description) = request.description {
            group.description = description;
        }
        if let Some(channels) = request.channels {
            group.prefs.channels = channels;
        }
        group.date_update = now();
        Ok(group.clone())
    }

    async fn update_usergroup_members(
        &self,
        ctx: &RequestContext,
        request: UsersUpdateRequest,
    ) -> SlackResult<Usergroup> {
        self.begin(ctx, "usergroups.users.update", Some(&request.usergroup))?;

        let mut state = self.state.lock();
        let group = state.group_mut(&request.usergroup)?;
        group.users = request.users;
        group.user_count = Some(group.users.len() as i64);
        group.date_update = now();
        Ok(group.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_group_keeps_name_reserved() {
        let fake = FakeSlack::new().with_usergroup(fixtures::disabled_usergroup("S1", "ops", "ops"));
        let ctx = RequestContext::new();

        let err = fake
            .create_usergroup(&ctx, CreateUsergroupRequest::new("OPS").handle("other"))
            .await
            .unwrap_err();
        assert_eq!(err.slack_code(), Some("name_already_exists"));

        let err = fake
            .create_usergroup(&ctx, CreateUsergroupRequest::new("other").handle("ops"))
            .await
            .unwrap_err();
        assert_eq!(err.slack_code(), Some("handle_already_exists"));
        assert_eq!(fake.usergroups().len(), 1);
    }

    #[tokio::test]
    async fn test_enable_twice() {
        let fake = FakeSlack::new().with_usergroup(fixtures::disabled_usergroup("S1", "ops", "ops"));
        let ctx = RequestContext::new();

        fake.enable_usergroup(&ctx, "S1").await.unwrap();
        let err = fake.enable_usergroup(&ctx, "S1").await.unwrap_err();
        assert_eq!(err.slack_code(), Some("already_enabled"));
    }

    #[tokio::test]
    async fn test_list_hides_disabled_and_members_by_default() {
        let mut group = fixtures::usergroup("S1", "ops", "ops");
        group.users = vec!["U1".into()];
        let fake = FakeSlack::new()
            .with_usergroup(group)
            .with_usergroup(fixtures::disabled_usergroup("S2", "old", "old"));
        let ctx = RequestContext::new();

        let groups = fake
            .list_usergroups(&ctx, ListUsergroupsRequest::new())
            .await
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].users.is_empty());

        let groups = fake
            .list_usergroups(
                &ctx,
                ListUsergroupsRequest::new()
                    .include_disabled(true)
                    .include_users(true),
            )
            .await
            .unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].users, vec!["U1".to_string()]);
    }

    #[tokio::test]
    async fn test_scripted_failure_is_logged_and_consumed() {
        let fake = FakeSlack::new();
        let ctx = RequestContext::new();
        fake.rate_limit_next("auth.test", Duration::from_secs(1));

        assert!(fake.auth_test(&ctx).await.unwrap_err().is_retryable());
        assert!(fake.auth_test(&ctx).await.is_ok());
        assert_eq!(fake.calls_to("auth.test"), 2);
    }

    #[tokio::test]
    async fn test_cancelled_context_is_not_logged() {
        let fake = FakeSlack::new();
        let ctx = RequestContext::new();
        ctx.cancel();

        let err = fake.auth_test(&ctx).await.unwrap_err();
        assert!(err.is_cancellation());
        assert!(fake.calls().is_empty());
    }
}
