//! Test fixtures for Slack API data.
//!
//! Provides realistic users, channels and usergroups for unit tests, plus
//! raw JSON bodies for transport-level tests.

use crate::services::auth_service::AuthTestResponse;
use crate::types::*;
use serde_json::json;

const CREATED: i64 = 1_609_459_200;

/// Active human user with an email address
pub fn user(id: &str, name: &str, email: &str) -> User {
    User {
        id: UserId::new(id),
        team_id: Some(TeamId::new("T1234567890")),
        name: name.to_string(),
        real_name: Some(name.to_string()),
        deleted: false,
        profile: Some(UserProfile {
            real_name: Some(name.to_string()),
            display_name: Some(name.to_string()),
            email: Some(email.to_string()),
        }),
        is_admin: false,
        is_bot: false,
        is_app_user: false,
        updated: Some(CREATED),
    }
}

/// Bot user without an email
pub fn bot_user(id: &str, name: &str) -> User {
    User {
        is_bot: true,
        profile: Some(UserProfile::default()),
        ..user(id, name, "")
    }
}

/// Deactivated user
pub fn deleted_user(id: &str, name: &str, email: &str) -> User {
    User {
        deleted: true,
        ..user(id, name, email)
    }
}

/// Public channel with topic and purpose set
pub fn channel(id: &str) -> Channel {
    Channel {
        id: ChannelId::new(id),
        name: Some("general".to_string()),
        is_channel: true,
        is_private: false,
        is_archived: false,
        is_general: true,
        is_shared: false,
        is_ext_shared: false,
        is_org_shared: false,
        creator: Some("U1234567890".to_string()),
        created: Some(CREATED),
        topic: Some(ChannelText {
            value: "General discussion".to_string(),
            creator: "U1234567890".to_string(),
            last_set: CREATED,
        }),
        purpose: Some(ChannelText {
            value: "A channel for general discussions".to_string(),
            creator: "U1234567890".to_string(),
            last_set: CREATED,
        }),
    }
}

/// Enabled usergroup with no members
pub fn usergroup(id: &str, name: &str, handle: &str) -> Usergroup {
    Usergroup {
        id: id.to_string(),
        team_id: "T1234567890".to_string(),
        is_usergroup: true,
        name: name.to_string(),
        description: format!("{name} team"),
        handle: handle.to_string(),
        created_by: Some("U1234567890".to_string()),
        user_count: Some(0),
        date_create: CREATED,
        date_update: CREATED,
        ..Default::default()
    }
}

/// Usergroup disabled at some point in the past
pub fn disabled_usergroup(id: &str, name: &str, handle: &str) -> Usergroup {
    Usergroup {
        deleted_by: Some("U1234567890".to_string()),
        date_delete: CREATED + 86_400,
        ..usergroup(id, name, handle)
    }
}

/// Identity returned by `auth.test` for a bot token
pub fn auth_test_response() -> AuthTestResponse {
    AuthTestResponse {
        ok: true,
        url: "https://team.slack.com/".to_string(),
        team: "Test Team".to_string(),
        user: "testbot".to_string(),
        team_id: TeamId::new("T1234567890"),
        user_id: UserId::new("U1234567890"),
        bot_id: Some("B1234567890".to_string()),
        enterprise_id: None,
    }
}

/// Create fixture JSON responses
pub mod responses {
    use super::*;

    /// Create an OK response
    pub fn ok() -> serde_json::Value {
        json!({ "ok": true })
    }

    /// Create an auth.test response
    pub fn auth_test() -> serde_json::Value {
        json!({
            "ok": true,
            "url": "https://team.slack.com/",
            "team": "Test Team",
            "user": "testbot",
            "team_id": "T1234567890",
            "user_id": "U1234567890",
            "bot_id": "B1234567890"
        })
    }

    /// Body wrapping a single usergroup, as create/enable/update return
    pub fn usergroup(group: &Usergroup) -> serde_json::Value {
        json!({ "ok": true, "usergroup": group })
    }

    /// Create a usergroups.list response
    pub fn usergroups_list(groups: &[Usergroup]) -> serde_json::Value {
        json!({ "ok": true, "usergroups": groups })
    }

    /// One page of users.list
    pub fn users_page(members: &[User], next_cursor: &str) -> serde_json::Value {
        json!({
            "ok": true,
            "members": members,
            "response_metadata": { "next_cursor": next_cursor }
        })
    }

    /// Create an error response
    pub fn error(code: &str) -> serde_json::Value {
        json!({
            "ok": false,
            "error": code
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usergroup_fixtures() {
        let group = usergroup("S1", "ops", "ops-team");
        assert!(group.is_enabled());
        assert_eq!(group.handle, "ops-team");

        let disabled = disabled_usergroup("S2", "ops", "ops-team");
        assert!(disabled.is_disabled());
    }

    #[test]
    fn test_user_fixtures() {
        assert!(user("U1", "jdoe", "jdoe@example.com").is_active_human());
        assert!(!bot_user("B1", "deploybot").is_active_human());
        assert!(!deleted_user("U2", "gone", "gone@example.com").is_active_human());
    }

    #[test]
    fn test_auth_response_decodes() {
        let decoded: AuthTestResponse = serde_json::from_value(responses::auth_test()).unwrap();
        assert_eq!(decoded.team_id, auth_test_response().team_id);
    }
}
