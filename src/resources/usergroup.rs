//! The `slack_usergroup` resource.
//!
//! Create, read, update, delete and import for one usergroup, expressed
//! as configuration in and state out. Lifecycle rules live in
//! [`UsergroupService`]; this layer maps between resource data and plans.

use crate::context::RequestContext;
use crate::errors::{ReconcileError, SlackResult};
use crate::provider::ProviderData;
use crate::reconcile::{UsergroupPlan, UsergroupService};
use crate::types::{LookupField, Usergroup};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// User-supplied configuration of a usergroup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsergroupConfig {
    /// Display name
    pub name: String,
    /// Description, empty by default
    pub description: String,
    /// Mention handle; the name is used when empty
    pub handle: String,
    /// Default channel IDs
    pub channels: Vec<String>,
    /// Member user IDs
    pub users: Vec<String>,
    /// Reject creation when an enabled group already uses the name or handle
    pub prevent_duplicate_names: bool,
}

impl UsergroupConfig {
    /// Configuration with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    fn plan(&self) -> UsergroupPlan {
        UsergroupPlan::new(self.name.as_str())
            .handle(self.handle.as_str())
            .description(self.description.as_str())
            .channels(self.channels.iter().cloned())
            .users(self.users.iter().cloned())
            .prevent_conflicts(self.prevent_duplicate_names)
            .normalized()
    }
}

/// Recorded state of a managed usergroup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsergroupState {
    /// Slack usergroup ID
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
    /// Carried over from configuration; Slack does not store it
    pub prevent_duplicate_names: bool,
}

impl UsergroupState {
    fn from_group(group: &Usergroup, prevent_duplicate_names: bool) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
            description: group.description.clone(),
            handle: group.handle.clone(),
            channels: group.channels().to_vec(),
            users: group.users.clone(),
            prevent_duplicate_names,
        }
    }

    fn from_plan(id: &str, plan: &UsergroupPlan) -> Self {
        Self {
            id: id.to_string(),
            name: plan.name.clone(),
            description: plan.description.clone(),
            handle: plan.handle.clone(),
            channels: plan.channels.clone(),
            users: plan.users.clone(),
            prevent_duplicate_names: plan.prevent_conflicts,
        }
    }
}

/// Usergroup resource bound to a configured provider
#[derive(Clone)]
pub struct UsergroupResource {
    service: Arc<dyn UsergroupService>,
}

impl UsergroupResource {
    /// Type name registered with the host
    pub const TYPE_NAME: &'static str = "slack_usergroup";

    /// Resource using the provider's usergroup service
    pub fn new(data: &ProviderData) -> Self {
        Self {
            service: data.usergroups.clone(),
        }
    }

    /// Resource over a specific service implementation
    pub fn with_service(service: Arc<dyn UsergroupService>) -> Self {
        Self { service }
    }

    /// Check configuration before planning.
    ///
    /// Only new resources with `prevent_duplicate_names` set are checked, and
    /// only enabled groups count as duplicates.
    #[instrument(skip(self, ctx, config), fields(name = %config.name))]
    pub async fn validate(
        &self,
        ctx: &RequestContext,
        config: &UsergroupConfig,
        id: Option<&str>,
    ) -> SlackResult<()> {
        if !config.prevent_duplicate_names || id.is_some() {
            return Ok(());
        }

        self.service
            .check_conflicts(ctx, None, &config.name, &config.handle, false)
            .await
    }

    /// Create the group (or revive a disabled one) and return its state
    #[instrument(skip(self, ctx, config), fields(name = %config.name))]
    pub async fn create(
        &self,
        ctx: &RequestContext,
        config: &UsergroupConfig,
    ) -> SlackResult<UsergroupState> {
        let plan = config.plan();
        let id = self.service.create_group(ctx, &plan).await?;
        self.read_back(ctx, &id, &plan).await
    }

    /// Refresh state from Slack.
    ///
    /// `Ok(None)` means the group is gone (or disabled) and should be
    /// dropped from state.
    #[instrument(skip(self, ctx, state), fields(id = %state.id))]
    pub async fn read(
        &self,
        ctx: &RequestContext,
        state: &UsergroupState,
    ) -> SlackResult<Option<UsergroupState>> {
        match self.service.read_group(ctx, &state.id).await {
            Ok(group) => Ok(Some(UsergroupState::from_group(
                &group,
                state.prevent_duplicate_names,
            ))),
            Err(err) if err.is_not_found() => {
                warn!(id = %state.id, "Usergroup not found in Slack; removing from state");
                Ok(None)
            }
            Err(err) => Err(err.context(format!("could not read usergroup {}", state.id))),
        }
    }

    /// Apply new configuration to an existing group
    #[instrument(skip(self, ctx, state, config), fields(id = %state.id))]
    pub async fn update(
        &self,
        ctx: &RequestContext,
        state: &UsergroupState,
        config: &UsergroupConfig,
    ) -> SlackResult<UsergroupState> {
        let plan = config.plan();
        self.service.update_group(ctx, &state.id, &plan).await?;
        self.read_back(ctx, &state.id, &plan).await
    }

    /// Disable the group
    #[instrument(skip(self, ctx, state), fields(id = %state.id))]
    pub async fn delete(&self, ctx: &RequestContext, state: &UsergroupState) -> SlackResult<()> {
        self.service.delete_group(ctx, &state.id).await
    }

    /// Adopt an existing enabled group by ID
    #[instrument(skip(self, ctx))]
    pub async fn import(&self, ctx: &RequestContext, id: &str) -> SlackResult<UsergroupState> {
        let probe = UsergroupState {
            id: id.to_string(),
            ..Default::default()
        };

        self.read(ctx, &probe).await?.ok_or_else(|| {
            ReconcileError::NotFound {
                field: LookupField::Id,
                value: id.to_string(),
            }
            .into()
        })
    }

    async fn read_back(
        &self,
        ctx: &RequestContext,
        id: &str,
        plan: &UsergroupPlan,
    ) -> SlackResult<UsergroupState> {
        match self.service.read_group(ctx, id).await {
            Ok(group) => {
                debug!(id = %group.id, "Read back usergroup");
                Ok(UsergroupState::from_group(&group, plan.prevent_conflicts))
            }
            Err(err) if err.is_not_found() => {
                warn!(%id, "Usergroup not found after create/update");
                Ok(UsergroupState::from_plan(id, plan))
            }
            Err(err) => Err(err.context(format!("could not read usergroup {id}"))),
        }
    }
}

impl std::fmt::Debug for UsergroupResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsergroupResource").finish_non_exhaustive()
    }
}
