//! Managed resources exposed by the provider.

pub mod usergroup;

pub use usergroup::{UsergroupConfig, UsergroupResource, UsergroupState};
