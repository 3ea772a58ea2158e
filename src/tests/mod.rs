//! Cross-module tests for the Slack provider core.

mod client_tests;
mod datasource_tests;

use crate::client::SlackApi;
use crate::mocks::FakeSlack;
use crate::reconcile::UsergroupServiceImpl;
use std::sync::Arc;

/// Reconciliation service over a shared fake workspace
fn service_over(fake: &Arc<FakeSlack>) -> UsergroupServiceImpl {
    let client: Arc<dyn SlackApi> = fake.clone();
    UsergroupServiceImpl::new(client)
}
