//! Usergroup upsert and reconciliation.

use super::UsergroupPlan;
use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::{NamingConflict, ReconcileError, SlackError, SlackResult};
use crate::queries::{SlackQueries, UsergroupQueries};
use crate::services::usergroups::{
    CreateUsergroupRequest, UpdateUsergroupRequest, UsersUpdateRequest,
};
use crate::types::{LookupField, Usergroup};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Lifecycle operations for usergroups.
///
/// Lookups come from the [`UsergroupQueries`] supertrait.
#[async_trait]
pub trait UsergroupService: UsergroupQueries {
    /// Create the group, or revive a disabled group that holds its name or handle.
    ///
    /// Returns the ID of the group now matching the plan.
    async fn create_group(&self, ctx: &RequestContext, plan: &UsergroupPlan)
        -> SlackResult<String>;

    /// Enable the group if needed, then apply the plan's attributes and members
    async fn enable_and_update(
        &self,
        ctx: &RequestContext,
        id: &str,
        plan: &UsergroupPlan,
    ) -> SlackResult<()>;

    /// The enabled group with this ID
    async fn read_group(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup>;

    /// Apply the plan to an existing group
    async fn update_group(
        &self,
        ctx: &RequestContext,
        id: &str,
        plan: &UsergroupPlan,
    ) -> SlackResult<()>;

    /// Disable the group
    async fn delete_group(&self, ctx: &RequestContext, id: &str) -> SlackResult<()>;

    /// Fail if another group already uses `name` or `handle`.
    ///
    /// Groups whose ID equals `resource_id` are not conflicts. Empty values
    /// are not checked. Every conflict found is reported in one error.
    async fn check_conflicts(
        &self,
        ctx: &RequestContext,
        resource_id: Option<&str>,
        name: &str,
        handle: &str,
        include_disabled: bool,
    ) -> SlackResult<()>;

    /// Replace the group's members; an empty list removes everyone
    async fn update_membership(
        &self,
        ctx: &RequestContext,
        id: &str,
        users: &[String],
    ) -> SlackResult<()>;
}

/// Map a create failure to the field Slack says collided
fn collision_field(error: &SlackError) -> Option<LookupField> {
    match error.slack_code()? {
        "name_already_exists" => Some(LookupField::Name),
        "handle_already_exists" => Some(LookupField::Handle),
        _ => None,
    }
}

/// [`UsergroupService`] backed by a [`SlackApi`]
#[derive(Clone)]
pub struct UsergroupServiceImpl {
    client: Arc<dyn SlackApi>,
    queries: Arc<dyn UsergroupQueries>,
}

impl UsergroupServiceImpl {
    /// Create a service whose lookups go through the same client
    pub fn new(client: Arc<dyn SlackApi>) -> Self {
        let queries = Arc::new(SlackQueries::new(client.clone()));
        Self { client, queries }
    }

    /// Create a service with a separate lookup implementation
    pub fn with_queries(client: Arc<dyn SlackApi>, queries: Arc<dyn UsergroupQueries>) -> Self {
        Self { client, queries }
    }

    async fn revive(
        &self,
        ctx: &RequestContext,
        plan: &UsergroupPlan,
        field: LookupField,
        create_error: SlackError,
    ) -> SlackResult<String> {
        let value = match field {
            LookupField::Handle => plan.handle.clone(),
            _ => plan.name.clone(),
        };

        let existing = match self.queries.find_by_field(ctx, field, &value, true).await {
            Ok(group) => group,
            Err(lookup) => {
                return Err(ReconcileError::LookupFailed {
                    remote: create_error.slack_code().unwrap_or_default().to_string(),
                    field,
                    value,
                    lookup: Box::new(lookup),
                }
                .into())
            }
        };

        if existing.is_enabled() {
            warn!(existing_id = %existing.id, %field, "Name collision with an enabled usergroup");
            return Err(ReconcileError::EnabledConflict {
                name: plan.name.clone(),
                field,
                value,
                existing_id: existing.id,
            }
            .into());
        }

        info!(id = %existing.id, %field, "Reviving disabled usergroup");
        self.enable_and_update(ctx, &existing.id, plan)
            .await
            .map_err(|e| e.context(format!("could not revive usergroup {}", existing.id)))?;

        Ok(existing.id)
    }
}

impl std::fmt::Debug for UsergroupServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsergroupServiceImpl").finish_non_exhaustive()
    }
}

#[async_trait]
impl UsergroupQueries for UsergroupServiceImpl {
    async fn find_by_field(
        &self,
        ctx: &RequestContext,
        field: LookupField,
        value: &str,
        include_disabled: bool,
    ) -> SlackResult<Usergroup> {
        self.queries
            .find_by_field(ctx, field, value, include_disabled)
            .await
    }
}

#[async_trait]
impl UsergroupService for UsergroupServiceImpl {
    #[instrument(skip(self, ctx, plan), fields(name = %plan.name))]
    async fn create_group(
        &self,
        ctx: &RequestContext,
        plan: &UsergroupPlan,
    ) -> SlackResult<String> {
        let plan = plan.normalized();
        let request = CreateUsergroupRequest::new(plan.name.as_str())
            .handle(plan.handle.as_str())
            .description(plan.description.as_str())
            .channels(plan.channels.clone());

        match self.client.create_usergroup(ctx, request).await {
            Ok(created) => {
                debug!(id = %created.id, "Usergroup created");
                self.update_membership(ctx, &created.id, &plan.users).await?;
                Ok(created.id)
            }
            Err(err) => match collision_field(&err) {
                Some(field) => self.revive(ctx, &plan, field, err).await,
                None => Err(err.context(format!("error creating usergroup {:?}", plan.name))),
            },
        }
    }

    #[instrument(skip(self, ctx, plan))]
    async fn enable_and_update(
        &self,
        ctx: &RequestContext,
        id: &str,
        plan: &UsergroupPlan,
    ) -> SlackResult<()> {
        let plan = plan.normalized();

        match self.client.enable_usergroup(ctx, id).await {
            Ok(_) => {}
            Err(err) if err.slack_code() == Some("already_enabled") => {
                debug!("Usergroup already enabled");
            }
            Err(err) => return Err(err.context(format!("could not enable usergroup {id}"))),
        }

        let request = UpdateUsergroupRequest::new(id)
            .name(plan.name.as_str())
            .handle(plan.handle.as_str())
            .description(plan.description.as_str())
            .channels(plan.channels.clone());
        self.client
            .update_usergroup(ctx, request)
            .await
            .map_err(|e| e.context(format!("could not update usergroup {id}")))?;

        self.update_membership(ctx, id, &plan.users).await
    }

    async fn read_group(&self, ctx: &RequestContext, id: &str) -> SlackResult<Usergroup> {
        self.queries
            .find_by_field(ctx, LookupField::Id, id, false)
            .await
    }

    async fn update_group(
        &self,
        ctx: &RequestContext,
        id: &str,
        plan: &UsergroupPlan,
    ) -> SlackResult<()> {
        self.enable_and_update(ctx, id, plan).await
    }

    #[instrument(skip(self, ctx))]
    async fn delete_group(&self, ctx: &RequestContext, id: &str) -> SlackResult<()> {
        self.client
            .disable_usergroup(ctx, id)
            .await
            .map_err(|e| e.context(format!("could not disable usergroup {id}")))?;
        Ok(())
    }

    #[instrument(skip(self, ctx))]
    async fn check_conflicts(
        &self,
        ctx: &RequestContext,
        resource_id: Option<&str>,
        name: &str,
        handle: &str,
        include_disabled: bool,
    ) -> SlackResult<()> {
        let mut conflicts = Vec::new();

        for (field, value) in [(LookupField::Name, name), (LookupField::Handle, handle)] {
            if value.is_empty() {
                continue;
            }

            match self
                .queries
                .find_by_field(ctx, field, value, include_disabled)
                .await
            {
                Ok(existing) if resource_id != Some(existing.id.as_str()) => {
                    conflicts.push(NamingConflict {
                        field,
                        value: field.value_of(&existing).to_string(),
                        enabled: existing.is_enabled(),
                        existing_id: existing.id,
                    });
                }
                Ok(_) => {}
                Err(err) if err.is_not_found() => {}
                Err(err) => {
                    return Err(err.context(format!(
                        "could not check usergroup {field} {value:?} for conflicts"
                    )))
                }
            }
        }

        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(ReconcileError::Conflicts(conflicts).into())
        }
    }

    #[instrument(skip(self, ctx, users), fields(users = users.len()))]
    async fn update_membership(
        &self,
        ctx: &RequestContext,
        id: &str,
        users: &[String],
    ) -> SlackResult<()> {
        let request = UsersUpdateRequest::new(id, users.to_vec());
        self.client
            .update_usergroup_members(ctx, request)
            .await
            .map_err(|e| e.context(format!("could not update members of usergroup {id}")))?;
        Ok(())
    }
}
