//! Error types for the Slack provider core.
//!
//! Maps Slack API error codes to semantic error types and carries the
//! reconciliation failures raised by the usergroup service.

use crate::types::LookupField;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for Slack integration
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Authorization error
    #[error("Authorization error: {0}")]
    Authorization(#[from] AuthorizationError),

    /// Request validation error
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Rate limit error
    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Server error
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Usergroup-specific API error
    #[error("{0}")]
    Usergroup(#[from] UsergroupApiError),

    /// Usergroup lookup or reconciliation failure
    #[error("{0}")]
    Reconcile(#[from] ReconcileError),

    /// The user exists but has been deactivated
    #[error("user {id} is deactivated in Slack")]
    UserDeactivated {
        /// User ID
        id: String,
    },

    /// The request context was cancelled
    #[error("context cancelled")]
    Cancelled,

    /// The request context deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// Remote error wrapped with the operation that produced it
    #[error("{context}: {source}")]
    Operation {
        /// Operation description, usually naming the target id
        context: String,
        /// Underlying error
        #[source]
        source: Box<SlackError>,
    },

    /// Generic API error
    #[error("API error: {code} - {message}")]
    Api {
        /// Slack error code
        code: String,
        /// Error message
        message: String,
    },
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Authentication(_) => "SLACK_AUTH",
            Self::Authorization(_) => "SLACK_AUTHZ",
            Self::Request(_) => "SLACK_REQUEST",
            Self::RateLimit(_) => "SLACK_RATE_LIMIT",
            Self::Network(_) => "SLACK_NETWORK",
            Self::Server(_) => "SLACK_SERVER",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Usergroup(_) => "SLACK_USERGROUP",
            Self::Reconcile(_) => "SLACK_RECONCILE",
            Self::UserDeactivated { .. } => "SLACK_USER_DEACTIVATED",
            Self::Cancelled => "SLACK_CANCELLED",
            Self::DeadlineExceeded => "SLACK_DEADLINE_EXCEEDED",
            Self::Operation { source, .. } => source.error_code(),
            Self::Api { .. } => "SLACK_API",
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimit(RateLimitError::RateLimited { .. }))
    }

    /// Get retry-after duration if applicable
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit(RateLimitError::RateLimited { retry_after, .. }) => Some(*retry_after),
            _ => None,
        }
    }

    /// Get HTTP status code if applicable
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::Authorization(_) => Some(403),
            Self::RateLimit(_) => Some(429),
            Self::Server(ServerError::ServiceUnavailable) => Some(503),
            Self::Server(ServerError::InternalError) => Some(500),
            Self::Request(_) => Some(400),
            _ => None,
        }
    }

    /// The raw Slack error code behind this error, if it came from Slack
    pub fn slack_code(&self) -> Option<&str> {
        match self {
            Self::Usergroup(e) => Some(e.code()),
            Self::Authentication(AuthenticationError::InvalidAuth) => Some("invalid_auth"),
            Self::Authentication(AuthenticationError::AccountInactive) => Some("account_inactive"),
            Self::Authentication(AuthenticationError::TokenRevoked) => Some("token_revoked"),
            Self::Authentication(AuthenticationError::TokenExpired) => Some("token_expired"),
            Self::Authorization(AuthorizationError::NotAuthed) => Some("not_authed"),
            Self::Authorization(AuthorizationError::MissingScope { .. }) => Some("missing_scope"),
            Self::Authorization(AuthorizationError::ChannelNotFound) => Some("channel_not_found"),
            Self::Authorization(AuthorizationError::UserNotFound) => Some("user_not_found"),
            Self::Authorization(AuthorizationError::UsersNotFound) => Some("users_not_found"),
            Self::Operation { source, .. } => source.slack_code(),
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Check whether this is a "not found" result from the usergroup query layer
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Reconcile(ReconcileError::NotFound { .. }) => true,
            Self::Operation { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Check whether this error means the request context ended
    pub fn is_cancellation(&self) -> bool {
        match self {
            Self::Cancelled | Self::DeadlineExceeded => true,
            Self::Operation { source, .. } => source.is_cancellation(),
            _ => false,
        }
    }

    /// Wrap this error with an operation description
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an API error from a Slack error response
    pub fn from_slack_error(code: &str, message: Option<&str>) -> Self {
        let msg = message.unwrap_or("Unknown error").to_string();

        match code {
            "invalid_auth" => Self::Authentication(AuthenticationError::InvalidAuth),
            "account_inactive" => Self::Authentication(AuthenticationError::AccountInactive),
            "token_revoked" => Self::Authentication(AuthenticationError::TokenRevoked),
            "token_expired" => Self::Authentication(AuthenticationError::TokenExpired),
            "not_authed" => Self::Authorization(AuthorizationError::NotAuthed),
            "missing_scope" => Self::Authorization(AuthorizationError::MissingScope { scope: msg }),
            "channel_not_found" => Self::Authorization(AuthorizationError::ChannelNotFound),
            "user_not_found" => Self::Authorization(AuthorizationError::UserNotFound),
            "users_not_found" => Self::Authorization(AuthorizationError::UsersNotFound),
            "invalid_arguments" => Self::Request(RequestError::InvalidArguments { message: msg }),
            "invalid_form_data" => Self::Request(RequestError::InvalidFormData { message: msg }),
            "name_already_exists" => Self::Usergroup(UsergroupApiError::NameAlreadyExists),
            "handle_already_exists" => Self::Usergroup(UsergroupApiError::HandleAlreadyExists),
            "already_enabled" => Self::Usergroup(UsergroupApiError::AlreadyEnabled),
            "internal_error" => Self::Server(ServerError::InternalError),
            "service_unavailable" => Self::Server(ServerError::ServiceUnavailable),
            _ => Self::Api {
                code: code.to_string(),
                message: msg,
            },
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Slack token is missing: set it explicitly or via SLACK_TOKEN")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// Invalid authentication credentials
    #[error("Invalid authentication credentials")]
    InvalidAuth,

    /// Account is inactive
    #[error("Account is inactive")]
    AccountInactive,

    /// Token has been revoked
    #[error("Token has been revoked")]
    TokenRevoked,

    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
}

/// Authorization errors
#[derive(Error, Debug)]
pub enum AuthorizationError {
    /// Not authenticated
    #[error("Not authenticated")]
    NotAuthed,

    /// Missing required scope
    #[error("Missing scope: {scope}")]
    MissingScope {
        /// The missing scope
        scope: String,
    },

    /// Channel not found
    #[error("Channel not found")]
    ChannelNotFound,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// No user matched the lookup (`users.lookupByEmail`)
    #[error("No user matched the lookup")]
    UsersNotFound,
}

/// Request validation errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// Invalid arguments
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Error message
        message: String,
    },

    /// Invalid form data
    #[error("Invalid form data: {message}")]
    InvalidFormData {
        /// Error message
        message: String,
    },
}

/// Rate limit errors
#[derive(Error, Debug)]
pub enum RateLimitError {
    /// Rate limited with retry information
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Duration to wait before retrying
        retry_after: Duration,
        /// Rate limit tier
        tier: Option<String>,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Internal server error
    #[error("Internal server error")]
    InternalError,

    /// Service unavailable
    #[error("Service unavailable")]
    ServiceUnavailable,

    /// Non-success HTTP status without a Slack error body
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

/// Slack error codes specific to the usergroups.* methods.
///
/// Display renders the bare Slack code, which is what callers compare against.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsergroupApiError {
    /// Another usergroup (enabled or disabled) already has this name
    #[error("name_already_exists")]
    NameAlreadyExists,

    /// Another usergroup (enabled or disabled) already has this handle
    #[error("handle_already_exists")]
    HandleAlreadyExists,

    /// `usergroups.enable` on a group that is not disabled
    #[error("already_enabled")]
    AlreadyEnabled,
}

impl UsergroupApiError {
    /// The Slack error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameAlreadyExists => "name_already_exists",
            Self::HandleAlreadyExists => "handle_already_exists",
            Self::AlreadyEnabled => "already_enabled",
        }
    }
}

/// A name or handle already held by another usergroup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConflict {
    /// Field that clashes
    pub field: LookupField,
    /// Value that clashes
    pub value: String,
    /// ID of the usergroup holding the value
    pub existing_id: String,
    /// Whether that usergroup is enabled
    pub enabled: bool,
}

impl fmt::Display for NamingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.enabled { "an enabled" } else { "a disabled" };
        write!(
            f,
            "{} user group with {} {:?} already exists (ID: {})",
            state, self.field, self.value, self.existing_id
        )
    }
}

/// Usergroup lookup and reconciliation failures
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// No usergroup matched the lookup
    #[error("no usergroup with {field} {value:?} found")]
    NotFound {
        /// Field searched
        field: LookupField,
        /// Value searched
        value: String,
    },

    /// Create hit a name/handle collision with a group that is still enabled
    #[error(
        "conflict when creating usergroup {name:?}: cannot reuse enabled usergroup matching {field}={value:?} (ID: {existing_id})"
    )]
    EnabledConflict {
        /// Name requested in the plan
        name: String,
        /// Field that collided
        field: LookupField,
        /// Value that collided
        value: String,
        /// ID of the enabled group
        existing_id: String,
    },

    /// Create hit a collision and the follow-up lookup failed
    #[error("Slack returned {remote:?}, and lookup of usergroup with {field} {value:?} failed: {lookup}")]
    LookupFailed {
        /// Slack error code returned by create
        remote: String,
        /// Field searched
        field: LookupField,
        /// Value searched
        value: String,
        /// Lookup error
        #[source]
        lookup: Box<SlackError>,
    },

    /// Name and/or handle are already used by other enabled groups
    #[error("conflict: {}", join_conflicts(.0))]
    Conflicts(Vec<NamingConflict>),
}

fn join_conflicts(conflicts: &[NamingConflict]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a rate limit from response headers
pub fn parse_rate_limit_error(retry_after_secs: u64, tier: Option<String>) -> RateLimitError {
    RateLimitError::RateLimited {
        retry_after: Duration::from_secs(retry_after_secs),
        tier,
    }
}
