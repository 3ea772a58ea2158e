//! Users service for Slack API.
//!
//! Looks users up by ID or email and lists the workspace directory.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
