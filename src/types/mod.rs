//! Common types for the Slack API.
//!
//! Defines shared data structures used across services.

use serde::{Deserialize, Serialize};

pub mod channel;
pub mod user;
pub mod usergroup;

pub use channel::*;
pub use user::*;
pub use usergroup::*;

macro_rules! slack_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw ID
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

slack_id!(
    /// Slack channel ID
    ChannelId
);

slack_id!(
    /// Slack user ID
    UserId
);

slack_id!(
    /// Slack team/workspace ID
    TeamId
);

slack_id!(
    /// Pagination cursor
    Cursor
);

impl UserId {
    /// Check if this is a regular user ID (starts with U or W)
    pub fn is_user(&self) -> bool {
        self.0.starts_with('U') || self.0.starts_with('W')
    }
}

/// Response metadata for pagination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Next cursor for pagination
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl ResponseMetadata {
    /// Check if there are more results
    pub fn has_more(&self) -> bool {
        self.next_cursor
            .as_ref()
            .map(|c| !c.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_types() {
        assert!(UserId::new("U1234567890").is_user());
        assert!(UserId::new("W0001").is_user());
        assert!(!UserId::new("B1234567890").is_user());
    }

    #[test]
    fn test_ids_are_transparent_in_json() {
        let id: ChannelId = serde_json::from_str("\"C024BE91L\"").unwrap();
        assert_eq!(id.as_str(), "C024BE91L");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C024BE91L\"");
        assert_eq!(id.to_string(), "C024BE91L");
    }

    #[test]
    fn test_response_metadata_has_more() {
        let meta = ResponseMetadata {
            next_cursor: Some("dGVhbTpDMDYxRkE1UEI=".to_string()),
        };
        assert!(meta.has_more());

        let empty_meta = ResponseMetadata {
            next_cursor: Some("".to_string()),
        };
        assert!(!empty_meta.has_more());

        assert!(!ResponseMetadata::default().has_more());
    }
}
