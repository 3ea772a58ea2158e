//! Request types for users service.

use crate::services::{bool_param, FormEncode};
use crate::transport::FormRequest;
use crate::types::{Cursor, UserId};

/// Request to get user info
#[derive(Debug, Clone)]
pub struct GetUserRequest {
    /// User ID
    pub user: UserId,
    /// Include user's locale
    pub include_locale: Option<bool>,
}

impl GetUserRequest {
    /// Create a new request
    pub fn new(user: impl Into<UserId>) -> Self {
        Self {
            user: user.into(),
            include_locale: None,
        }
    }

    /// Include locale information
    pub fn include_locale(mut self, include: bool) -> Self {
        self.include_locale = Some(include);
        self
    }
}

impl FormEncode for GetUserRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("user", self.user.as_str())
            .optional_field("include_locale", self.include_locale.map(bool_param))
    }
}

/// Request to list users
#[derive(Debug, Clone, Default)]
pub struct ListUsersRequest {
    /// Pagination cursor
    pub cursor: Option<Cursor>,
    /// Page size
    pub limit: Option<u32>,
    /// Team ID for Enterprise Grid
    pub team_id: Option<String>,
}

impl ListUsersRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set page size
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, id: impl Into<String>) -> Self {
        self.team_id = Some(id.into());
        self
    }
}

impl FormEncode for ListUsersRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.optional_field("cursor", self.cursor.as_ref().map(Cursor::as_str))
            .optional_field("limit", self.limit.map(|n| n.to_string()))
            .optional_field("team_id", self.team_id.as_deref())
    }
}

/// Request to look up user by email
#[derive(Debug, Clone)]
pub struct LookupByEmailRequest {
    /// Email address
    pub email: String,
}

impl LookupByEmailRequest {
    /// Create a new request
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl FormEncode for LookupByEmailRequest {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form.field("email", self.email.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    fn form() -> FormRequest {
        FormRequest::post("https://slack.com/api/users.list", HeaderMap::new())
    }

    #[test]
    fn test_list_users_first_page_has_no_cursor() {
        let encoded = ListUsersRequest::new().limit(200).encode(form());
        assert_eq!(encoded.get("cursor"), None);
        assert_eq!(encoded.get("limit"), Some("200"));
    }

    #[test]
    fn test_get_user_encodes_id() {
        let encoded = GetUserRequest::new("U123").include_locale(true).encode(form());
        assert_eq!(encoded.get("user"), Some("U123"));
        assert_eq!(encoded.get("include_locale"), Some("true"));
    }
}
