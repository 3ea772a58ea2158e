//! Conversations service for Slack API.
//!
//! Read-only access to channel metadata.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
