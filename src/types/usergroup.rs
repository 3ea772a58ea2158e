//! Usergroup types for the Slack API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Usergroup (User Group / Team) representation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usergroup {
    /// Usergroup ID
    pub id: String,
    /// Team ID
    #[serde(default)]
    pub team_id: String,
    /// Whether this is a usergroup (always true)
    #[serde(default)]
    pub is_usergroup: bool,
    /// Whether this is an external usergroup
    #[serde(default)]
    pub is_external: bool,
    /// Name of the usergroup
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Mention handle, unique across the workspace
    #[serde(default)]
    pub handle: String,
    /// Created by user ID
    #[serde(default)]
    pub created_by: Option<String>,
    /// Updated by user ID
    #[serde(default)]
    pub updated_by: Option<String>,
    /// Deleted by user ID
    #[serde(default)]
    pub deleted_by: Option<String>,
    /// Preferences
    #[serde(default)]
    pub prefs: UsergroupPrefs,
    /// Member user IDs; only populated when listed with `include_users`
    #[serde(default)]
    pub users: Vec<String>,
    /// Number of users in the group
    #[serde(default)]
    pub user_count: Option<i64>,
    /// Date created (Unix timestamp)
    #[serde(default)]
    pub date_create: i64,
    /// Date updated (Unix timestamp)
    #[serde(default)]
    pub date_update: i64,
    /// Date disabled (Unix timestamp), 0 while enabled
    #[serde(default)]
    pub date_delete: i64,
}

impl Usergroup {
    /// Check if the usergroup is enabled
    pub fn is_enabled(&self) -> bool {
        self.date_delete == 0
    }

    /// Check if the usergroup has been disabled (soft-deleted)
    pub fn is_disabled(&self) -> bool {
        !self.is_enabled()
    }

    /// Default channel IDs for the group
    pub fn channels(&self) -> &[String] {
        &self.prefs.channels
    }
}

/// Usergroup preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsergroupPrefs {
    /// Channel IDs the group should be in
    #[serde(default)]
    pub channels: Vec<String>,
    /// Group IDs
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Attribute a usergroup can be looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    /// Display name
    Name,
    /// Mention handle
    Handle,
    /// Usergroup ID
    Id,
}

impl LookupField {
    /// Field name as used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Handle => "handle",
            Self::Id => "id",
        }
    }

    /// The value of this field on `group`
    pub fn value_of<'a>(&self, group: &'a Usergroup) -> &'a str {
        match self {
            Self::Name => &group.name,
            Self::Handle => &group.handle,
            Self::Id => &group.id,
        }
    }

    /// Whether `group` matches `value` on this field.
    ///
    /// IDs compare exactly; names and handles compare case-insensitively,
    /// the way Slack enforces their uniqueness.
    pub fn matches(&self, group: &Usergroup, value: &str) -> bool {
        let actual = self.value_of(group);
        match self {
            Self::Id => actual == value,
            Self::Name | Self::Handle => actual.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn group() -> Usergroup {
        Usergroup {
            id: "S0614TZR7".to_string(),
            name: "Platform Oncall".to_string(),
            handle: "platform-oncall".to_string(),
            ..Default::default()
        }
    }

    #[test_case(LookupField::Name, "Platform Oncall", true; "exact name")]
    #[test_case(LookupField::Name, "platform oncall", true; "name ignores case")]
    #[test_case(LookupField::Handle, "PLATFORM-ONCALL", true; "handle ignores case")]
    #[test_case(LookupField::Handle, "platform", false; "handle prefix")]
    #[test_case(LookupField::Id, "S0614TZR7", true; "exact id")]
    #[test_case(LookupField::Id, "s0614tzr7", false; "id is case sensitive")]
    fn test_lookup_matching(field: LookupField, value: &str, expected: bool) {
        assert_eq!(field.matches(&group(), value), expected);
    }

    #[test]
    fn test_deserialize_disabled_group() {
        let group: Usergroup = serde_json::from_str(
            r#"{
                "id": "S0614TZR7",
                "team_id": "T060RNRCH",
                "is_usergroup": true,
                "name": "Team Admins",
                "description": "A group of all Administrators on your team.",
                "handle": "admins",
                "prefs": {"channels": ["C024BE91L"], "groups": []},
                "user_count": 2,
                "date_create": 1446598059,
                "date_update": 1446670362,
                "date_delete": 1446670362
            }"#,
        )
        .unwrap();

        assert!(group.is_disabled());
        assert_eq!(group.channels(), &["C024BE91L".to_string()]);
        assert!(group.users.is_empty());
    }

    #[test]
    fn test_missing_date_delete_means_enabled() {
        let group: Usergroup =
            serde_json::from_str(r#"{"id":"S1","name":"ops","handle":"ops"}"#).unwrap();
        assert!(group.is_enabled());
    }
}
