//! Service implementations for Slack API endpoints.
//!
//! Each service module binds one category of Slack Web API methods to typed
//! requests and responses. Services do not retry and do not interpret error
//! content; both belong to the layers above.

pub mod auth_service;
pub mod conversations;
pub mod usergroups;
pub mod users;

pub use auth_service::AuthService;
pub use conversations::ConversationsService;
pub use usergroups::UsergroupsService;
pub use users::UsersService;

use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::transport::{decode, FormRequest, HttpTransport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Request types that encode themselves as Slack form fields
pub trait FormEncode {
    /// Append this request's fields to `form`
    fn encode(&self, form: FormRequest) -> FormRequest;
}

/// Plumbing shared by every service: transport, auth headers and base URL
#[derive(Clone)]
pub struct ApiCaller {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl ApiCaller {
    /// Create a caller for the given transport and base URL
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, base_url: String) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Call a Slack method with the given request and decode the response
    pub async fn call<Req, Res>(&self, api_method: &str, request: &Req) -> SlackResult<Res>
    where
        Req: FormEncode + ?Sized,
        Res: DeserializeOwned,
    {
        let headers = self.auth.headers()?;
        let form = request.encode(FormRequest::post(self.build_url(api_method), headers));
        debug!(api_method, fields = form.fields.len(), "Dispatching Slack request");
        let body = self.transport.send(form).await?;
        decode(body)
    }
}

impl std::fmt::Debug for ApiCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCaller")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .finish()
    }
}

/// Request without parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParams;

impl FormEncode for NoParams {
    fn encode(&self, form: FormRequest) -> FormRequest {
        form
    }
}

pub(crate) fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
