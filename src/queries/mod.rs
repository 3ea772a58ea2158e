//! Usergroup lookups on top of the Slack facade.
//!
//! Slack has no "get usergroup" method, so every lookup lists the groups and
//! scans them client side.

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::{ReconcileError, SlackResult};
use crate::services::usergroups::ListUsergroupsRequest;
use crate::types::{LookupField, Usergroup};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Usergroup lookup operations
#[async_trait]
pub trait UsergroupQueries: Send + Sync {
    /// Find the first usergroup whose `field` matches `value`.
    ///
    /// Disabled groups are only considered when `include_disabled` is set.
    /// Returns [`ReconcileError::NotFound`] when nothing matches.
    async fn find_by_field(
        &self,
        ctx: &RequestContext,
        field: LookupField,
        value: &str,
        include_disabled: bool,
    ) -> SlackResult<Usergroup>;
}

/// Pick the first group in listing order that matches
pub fn find_in<'a>(
    groups: &'a [Usergroup],
    field: LookupField,
    value: &str,
    include_disabled: bool,
) -> Option<&'a Usergroup> {
    groups
        .iter()
        .filter(|group| include_disabled || group.is_enabled())
        .find(|group| field.matches(group, value))
}

/// [`UsergroupQueries`] backed by `usergroups.list`
#[derive(Clone)]
pub struct SlackQueries {
    client: Arc<dyn SlackApi>,
}

impl SlackQueries {
    /// Create queries over the given client
    pub fn new(client: Arc<dyn SlackApi>) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for SlackQueries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackQueries").finish_non_exhaustive()
    }
}

#[async_trait]
impl UsergroupQueries for SlackQueries {
    #[instrument(skip(self, ctx), fields(field = %field))]
    async fn find_by_field(
        &self,
        ctx: &RequestContext,
        field: LookupField,
        value: &str,
        include_disabled: bool,
    ) -> SlackResult<Usergroup> {
        let request = ListUsergroupsRequest::new()
            .include_disabled(include_disabled)
            .include_users(true);
        let groups = self.client.list_usergroups(ctx, request).await?;

        match find_in(&groups, field, value, include_disabled) {
            Some(group) => {
                debug!(id = %group.id, enabled = group.is_enabled(), "Usergroup found");
                Ok(group.clone())
            }
            None => Err(ReconcileError::NotFound {
                field,
                value: value.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_first_match_wins() {
        let mut first = fixtures::usergroup("S1", "ops", "ops");
        first.date_delete = 1_700_000_000;
        let second = fixtures::usergroup("S2", "ops", "ops-2");
        let groups = vec![first, second];

        let found = find_in(&groups, LookupField::Name, "ops", true).unwrap();
        assert_eq!(found.id, "S1");

        let found = find_in(&groups, LookupField::Name, "ops", false).unwrap();
        assert_eq!(found.id, "S2");
    }

    #[test]
    fn test_disabled_groups_hidden_unless_requested() {
        let groups = vec![fixtures::disabled_usergroup("S9", "legacy", "legacy")];
        assert!(find_in(&groups, LookupField::Handle, "legacy", false).is_none());
        assert!(find_in(&groups, LookupField::Handle, "legacy", true).is_some());
    }
}
