//! Usergroup reconciliation.
//!
//! Slack never hard-deletes a usergroup: "deleting" disables it and the name
//! and handle stay reserved. Creating a group whose name or handle belongs to
//! a disabled group therefore fails, and [`UsergroupService::create_group`]
//! turns that failure into re-enabling and updating the old group.

mod plan;
mod service;

pub use plan::UsergroupPlan;
pub use service::{UsergroupService, UsergroupServiceImpl};
