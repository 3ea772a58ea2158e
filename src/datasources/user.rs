//! Single user lookup by ID or email.

use crate::client::SlackApi;
use crate::context::RequestContext;
use crate::errors::{SlackError, SlackResult};
use crate::observability::mask_email;
use crate::types::User;
use tracing::{instrument, trace};

/// How to find the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    /// By user ID
    Id(String),
    /// By email address
    Email(String),
}

/// Flattened user data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSummary {
    /// User ID
    pub id: String,
    /// Username
    pub name: String,
    /// Profile email, empty when hidden
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email().unwrap_or_default().to_string(),
        }
    }
}

/// Look up one active user
#[instrument(skip(ctx, client, query))]
pub async fn read_user(
    ctx: &RequestContext,
    client: &dyn SlackApi,
    query: &UserQuery,
) -> SlackResult<UserSummary> {
    let user = match query {
        UserQuery::Id(id) => client.user_info(ctx, id).await,
        UserQuery::Email(email) => client.user_by_email(ctx, email).await,
    }
    .map_err(|e| e.context("unable to fetch user info"))?;

    if user.deleted {
        return Err(SlackError::UserDeactivated {
            id: user.id.to_string(),
        });
    }

    let summary = UserSummary::from(&user);
    trace!(id = %summary.id, email = %mask_email(&summary.email), "Fetched Slack user");
    Ok(summary)
}
