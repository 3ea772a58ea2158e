//! HTTP transport layer for the Slack client.
//!
//! Provides low-level HTTP communication with the Slack API,
//! including request building, response parsing, and error handling.

use crate::errors::{
    parse_rate_limit_error, NetworkError, ResponseError, ServerError, SlackError, SlackResult,
};
use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Retry-After value used when a 429 omits the header
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP transport for Slack Web API calls.
///
/// Implementations return the decoded JSON body of a successful (`ok: true`)
/// response and map everything else into [`SlackError`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a form-encoded request
    async fn send(&self, request: FormRequest) -> SlackResult<serde_json::Value>;
}

/// Decode a successful response body into a typed response
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> SlackResult<T> {
    serde_json::from_value(value).map_err(|e| SlackError::Response(ResponseError::from(e)))
}

/// Form-encoded request
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// HTTP method
    pub method: Method,
    /// Full request URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            fields: Vec::new(),
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a form field when the value is present
    pub fn optional_field<V: Into<String>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.field(name, v),
            None => self,
        }
    }

    /// Look up a field value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The Slack method name, i.e. the last path segment of the URL
    pub fn api_method(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// Interpret a Slack response: HTTP status first, then the `ok` envelope.
pub fn parse_slack_body(
    status: StatusCode,
    headers: &HeaderMap,
    body: &str,
) -> SlackResult<serde_json::Value> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = headers
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

        let tier = headers
            .get("X-Slack-Rate-Limit-Tier")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        return Err(SlackError::RateLimit(parse_rate_limit_error(retry_after, tier)));
    }

    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) if !status.is_success() => {
            return Err(SlackError::Server(ServerError::UnexpectedStatus {
                status: status.as_u16(),
            }))
        }
        Err(e) => return Err(SlackError::Response(ResponseError::from(e))),
    };

    match json.get("ok").and_then(|v| v.as_bool()) {
        Some(true) => Ok(json),
        Some(false) => {
            let error_code = json
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown_error");
            // missing_scope carries the scope in "needed"
            let detail = json
                .get("needed")
                .and_then(|v| v.as_str())
                .or_else(|| json.get("error").and_then(|v| v.as_str()));

            Err(SlackError::from_slack_error(error_code, detail))
        }
        None => Err(SlackError::Response(ResponseError::UnexpectedResponse {
            message: "response has no \"ok\" field".to_string(),
        })),
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn parse_response(&self, response: Response) -> SlackResult<serde_json::Value> {
        let status = response.status();
        let headers = response.headers().clone();

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        debug!(status = %status, body_len = body.len(), "Received response");

        parse_slack_body(status, &headers, &body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(api_method = %request.api_method()))]
    async fn send(&self, request: FormRequest) -> SlackResult<serde_json::Value> {
        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .form(&request.fields)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        self.parse_response(response).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
