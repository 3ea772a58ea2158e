//! Response types for usergroups service.

use crate::types::Usergroup;
use serde::{Deserialize, Serialize};

/// Response carrying a single usergroup.
///
/// Returned by usergroups.create, .enable, .disable, .update and .users.update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsergroupResponse {
    /// The affected usergroup
    pub usergroup: Usergroup,
}

/// Response from usergroups.list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsergroupsResponse {
    /// List of usergroups
    #[serde(default)]
    pub usergroups: Vec<Usergroup>,
}
