//! Every enabled usergroup in the workspace.

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::SlackResult;
use crate::services::usergroups::ListUsergroupsRequest;
use crate::types::Usergroup;
use tracing::{instrument, trace};

/// Flattened usergroup data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsergroupSummary {
    /// Usergroup ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Mention handle
    pub handle: String,
    /// Default channel IDs
    pub channels: Vec<String>,
    /// Member user IDs
    pub users: Vec<String>,
}

impl From<&Usergroup> for UsergroupSummary {
    fn from(group: &Usergroup) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            description: group.description.clone(),
            handle: group.handle.clone(),
            channels: group.channels().to_vec(),
            users: group.users.clone(),
        }
    }
}

/// Result of [`read_all_usergroups`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllUsergroups {
    /// Enabled usergroups in listing order
    pub usergroups: Vec<UsergroupSummary>,
    /// `usergroups.len()`
    pub total: usize,
}

/// List enabled usergroups with their members
#[instrument(skip(ctx, client))]
pub async fn read_all_usergroups(
    ctx: &RequestContext,
    client: &dyn SlackApi,
) -> SlackResult<AllUsergroups> {
    let groups = client
        .list_usergroups(ctx, ListUsergroupsRequest::new().include_users(true))
        .await
        .map_err(|e| e.context("unable to fetch Slack user groups"))?;
    trace!(total_usergroups = groups.len(), "Fetched Slack user groups");

    let usergroups: Vec<UsergroupSummary> = groups
        .iter()
        .filter(|group| group.is_enabled())
        .map(UsergroupSummary::from)
        .collect();

    Ok(AllUsergroups {
        total: usergroups.len(),
        usergroups,
    })
}
