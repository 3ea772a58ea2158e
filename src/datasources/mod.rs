//! Read-only data sources.
//!
//! Each data source is a free function over a [`SlackApi`](crate::client::SlackApi)
//! returning a flat summary type.

pub mod conversation;
pub mod user;
pub mod usergroups;
pub mod users;

pub use conversation::{read_conversation, ConversationSummary};
pub use user::{read_user, UserQuery, UserSummary};
pub use usergroups::{read_all_usergroups, AllUsergroups, UsergroupSummary};
pub use users::{read_all_users, AllUsers};
