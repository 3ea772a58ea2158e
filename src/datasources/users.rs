//! Every active human user in the workspace.

use super::UserSummary;
use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use tracing::{instrument, trace};

/// Result of [`read_all_users`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllUsers {
    /// Active, non-bot users in listing order
    pub users: Vec<UserSummary>,
    /// `users.len()`
    pub total: usize,
}

/// List active non-bot users
#[instrument(skip(ctx, client))]
pub async fn read_all_users(ctx: &RequestContext, client: &dyn SlackApi) -> SlackResult<AllUsers> {
    let members = client
        .list_users(ctx)
        .await
        .map_err(|e| e.context("unable to fetch Slack users"))?;
    trace!(total_members = members.len(), "Fetched Slack users");

    let users: Vec<UserSummary> = members
        .iter()
        .filter(|user| !user.deleted && !user.is_bot)
        .map(UserSummary::from)
        .collect();

    Ok(AllUsers {
        total: users.len(),
        users,
    })
}
