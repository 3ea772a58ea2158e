//! Slack Provider Core
//!
//! The Slack side of an infrastructure-as-code provider:
//! - A remote facade over the Web API methods the provider needs (users,
//!   usergroups, conversations)
//! - A decorator that waits out rate limits until the request context ends
//! - Usergroup lookups by name, handle or ID
//! - Usergroup reconciliation that revives disabled groups instead of
//!   failing on name collisions
//! - The `slack_usergroup` resource and read-only data sources
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_provider_core::{ProviderConfig, RequestContext, SlackProvider};
//! use slack_provider_core::resources::{UsergroupConfig, UsergroupResource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = RequestContext::new();
//!     // Token from SLACK_TOKEN
//!     let provider = SlackProvider::configure(&ctx, &ProviderConfig::default()).await?;
//!
//!     let resource = UsergroupResource::new(&provider);
//!     let mut config = UsergroupConfig::new("on-call");
//!     config.users = vec!["U1234567890".to_string()];
//!
//!     let state = resource.create(&ctx, &config).await?;
//!     println!("usergroup {} ready", state.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Resilience
pub mod resilience;

// Usergroup lookups and reconciliation
pub mod queries;
pub mod reconcile;

// Provider surface
pub mod datasources;
pub mod provider;
pub mod resources;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{SlackApi, SlackClientImpl};
pub use config::{SlackConfig, SlackConfigBuilder};
pub use context::RequestContext;
pub use errors::{SlackError, SlackResult};
pub use provider::{ProviderConfig, ProviderData, SlackProvider};
pub use queries::{SlackQueries, UsergroupQueries};
pub use reconcile::{UsergroupPlan, UsergroupService, UsergroupServiceImpl};
pub use resilience::RateLimitRetry;

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a rate-limit-retrying Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<RateLimitRetry<SlackClientImpl>> {
    Ok(RateLimitRetry::new(SlackClientImpl::new(config)?))
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_TOKEN` - API token (falls back to `SLACK_BOT_TOKEN`)
/// - `SLACK_BASE_URL` - API base URL override
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<RateLimitRetry<SlackClientImpl>> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
