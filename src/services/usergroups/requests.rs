//! Request types for usergroups service.

use crate::services::{bool_param, FormEncode};
use crate::transport::FormRequest;

/// Value sent as `users` to clear every member of a group
pub const EMPTY_MEMBERS: &str = "[]";

/// Request to create a usergroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUsergroupRequest {
    /// Name of the usergroup
    pub name: String,
    /// Mention handle
    pub handle: Option<String>,
    /// Description of the usergroup
    pub description: Option<String>,
    /// Default channel IDs
    pub channels: Vec<String>,
    /// Whether to include the number of users in the usergroup
    pub include_count: Option<bool>,
    /// Team ID (for enterprise)
    pub team_id: Option<String>,
}

impl CreateUsergroupRequest {
    /// Create a new usergroup request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            description: None,
            channels: Vec::new(),
            include_count: None,
            team_id: None,
        }
    }

    /// Set the handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the channels
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl FormEncode for CreateUsergroupRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        let channels = (!self.channels.is_empty()).then(|| self.channels.join(","));
        form.field("name", self.name.as_str())
            .optional_field("handle", self.handle.as_deref())
            .optional_field("description", self.description.as_deref())
            .optional_field("channels", channels)
            .optional_field("include_count", self.include_count.map(bool_param))
            .optional_field("team_id", self.team_id.as_deref())
    }
}

/// Request targeting a single usergroup by ID (`usergroups.enable` / `usergroups.disable`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsergroupIdRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// Whether to include the number of users
    pub include_count: Option<bool>,
    /// Team ID (for enterprise)
    pub team_id: Option<String>,
}

impl UsergroupIdRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            include_count: None,
            team_id: None,
        }
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl FormEncode for UsergroupIdRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("usergroup", self.usergroup.as_str())
            .optional_field("include_count", self.include_count.map(bool_param))
            .optional_field("team_id", self.team_id.as_deref())
    }
}

/// Request to list usergroups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsergroupsRequest {
    /// Include disabled usergroups
    pub include_disabled: Option<bool>,
    /// Include the number of users in each usergroup
    pub include_count: Option<bool>,
    /// Include users in each usergroup
    pub include_users: Option<bool>,
    /// Team ID (for enterprise)
    pub team_id: Option<String>,
}

impl ListUsergroupsRequest {
    /// Create a new list usergroups request
    pub fn new() -> Self {
        Self::default()
    }

    /// Include disabled usergroups
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Include count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Include users
    pub fn include_users(mut self, include: bool) -> Self {
        self.include_users = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl FormEncode for ListUsergroupsRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.optional_field("include_disabled", self.include_disabled.map(bool_param))
            .optional_field("include_count", self.include_count.map(bool_param))
            .optional_field("include_users", self.include_users.map(bool_param))
            .optional_field("team_id", self.team_id.as_deref())
    }
}

/// Request to update a usergroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUsergroupRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// New name
    pub name: Option<String>,
    /// New handle
    pub handle: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New default channels; `Some(vec![])` clears them
    pub channels: Option<Vec<String>>,
    /// Whether to include count
    pub include_count: Option<bool>,
    /// Team ID (for enterprise)
    pub team_id: Option<String>,
}

impl UpdateUsergroupRequest {
    /// Create a new update usergroup request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            name: None,
            handle: None,
            description: None,
            channels: None,
            include_count: None,
            team_id: None,
        }
    }

    /// Set new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set new handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set new channels
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }
}

impl FormEncode for UpdateUsergroupRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("usergroup", self.usergroup.as_str())
            .optional_field("name", self.name.as_deref())
            .optional_field("handle", self.handle.as_deref())
            .optional_field("description", self.description.as_deref())
            .optional_field("channels", self.channels.as_ref().map(|c| c.join(",")))
            .optional_field("include_count", self.include_count.map(bool_param))
            .optional_field("team_id", self.team_id.as_deref())
    }
}

/// Request to replace the members of a usergroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersUpdateRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// User IDs to set as the complete member list
    pub users: Vec<String>,
    /// Include count in response
    pub include_count: Option<bool>,
    /// Team ID (for enterprise)
    pub team_id: Option<String>,
}

impl UsersUpdateRequest {
    /// Create a new users update request
    pub fn new(usergroup: impl Into<String>, users: Vec<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            users,
            include_count: None,
            team_id: None,
        }
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Wire value of `users`: comma-joined IDs, or the empty-list marker
    pub fn users_param(&self) -> String {
        if self.users.is_empty() {
            EMPTY_MEMBERS.to_string()
        } else {
            self.users.join(",")
        }
    }
}

impl FormEncode for UsersUpdateRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("usergroup", self.usergroup.as_str())
            .field("users", self.users_param())
            .optional_field("include_count", self.include_count.map(bool_param))
            .optional_field("team_id", self.team_id.as_deref())
    }
}
