//! Desired state of a usergroup.

/// What a usergroup should look like after reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsergroupPlan {
    /// Display name
    pub name: String,
    /// Description; empty clears it
    pub description: String,
    /// Mention handle; empty means "same as the name"
    pub handle: String,
    /// Default channel IDs
    pub channels: Vec<String>,
    /// Complete member list
    pub users: Vec<String>,
    /// Refuse to plan over an enabled group with the same name or handle
    pub prevent_conflicts: bool,
}

impl UsergroupPlan {
    /// Plan for a group with the given name and nothing else set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the default channels
    pub fn channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the members
    pub fn users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users = users.into_iter().map(Into::into).collect();
        self
    }

    /// Set conflict prevention
    pub fn prevent_conflicts(mut self, prevent: bool) -> Self {
        self.prevent_conflicts = prevent;
        self
    }

    /// Handle that will actually be sent to Slack
    pub fn effective_handle(&self) -> &str {
        if self.handle.is_empty() {
            &self.name
        } else {
            &self.handle
        }
    }

    /// Copy of the plan with defaults filled in
    pub fn normalized(&self) -> Self {
        let mut plan = self.clone();
        if plan.handle.is_empty() {
            plan.handle = plan.name.clone();
        }
        plan
    }
}
