//! Test doubles.
//!
//! [`FakeSlack`] stands in for a whole workspace at the [`SlackApi`](crate::client::SlackApi)
//! level; [`MockHttpTransport`] replays canned HTTP responses underneath the
//! real client.

mod fake_slack;

pub use fake_slack::{FakeCall, FakeSlack};

use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::transport::{parse_slack_body, FormRequest, HttpTransport};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, StatusCode};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: String,
    /// Delay before responding
    pub delay: Option<Duration>,
    /// Transport-level error to return instead of a response
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Successful response with a raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            body: body.into(),
            delay: None,
            error: None,
        }
    }

    /// Successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap_or_default())
    }

    /// `ok: false` response carrying a Slack error code
    pub fn slack_error(code: &str) -> Self {
        Self::ok(serde_json::json!({ "ok": false, "error": code }).to_string())
    }

    /// HTTP 429 with a `Retry-After` header
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Retry-After", HeaderValue::from(retry_after_secs));
        Self {
            status: 429,
            headers,
            body: r#"{"ok":false,"error":"ratelimited"}"#.to_string(),
            delay: None,
            error: None,
        }
    }

    /// Fail without a response
    pub fn error(error: SlackError) -> Self {
        Self {
            error: Some(error),
            ..Self::ok("")
        }
    }

    /// Respond after `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// HTTP transport that replays queued responses and records requests
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<FormRequest>>,
}

impl MockHttpTransport {
    /// Create a mock transport with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a successful JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Requests received so far
    pub fn recorded_requests(&self) -> Vec<FormRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<FormRequest> {
        self.requests.lock().last().cloned()
    }

    /// Responses not yet consumed
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: FormRequest) -> SlackResult<serde_json::Value> {
        let method = request.api_method().to_string();
        self.requests.lock().push(request);

        let response = self.responses.lock().pop_front().ok_or_else(|| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: format!("no mock response queued for {method}"),
            })
        })?;

        if let Some(delay) = response.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = response.error {
            return Err(error);
        }

        let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
        parse_slack_body(status, &response.headers, &response.body)
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: &str) -> FormRequest {
        FormRequest::post(format!("https://slack.com/api/{method}"), HeaderMap::new())
            .field("usergroup", "S1")
    }

    #[tokio::test]
    async fn test_replays_in_order_and_records() {
        let transport = MockHttpTransport::new()
            .add_response(MockResponse::ok(r#"{"ok":true,"n":1}"#))
            .add_response(MockResponse::slack_error("no_such_subteam"));

        let first = transport.send(request("usergroups.enable")).await.unwrap();
        assert_eq!(first["n"], 1);

        let err = transport.send(request("usergroups.enable")).await.unwrap_err();
        assert_eq!(err.slack_code(), Some("no_such_subteam"));

        let recorded = transport.recorded_requests();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].get("usergroup"), Some("S1"));
        assert_eq!(transport.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_response() {
        let transport = MockHttpTransport::new().add_response(MockResponse::rate_limited(7));
        let err = transport.send(request("usergroups.list")).await.unwrap_err();
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
    }

    #[tokio::test]
    async fn test_empty_queue_is_an_error() {
        let transport = MockHttpTransport::new();
        let err = transport.send(request("auth.test")).await.unwrap_err();
        assert!(err.to_string().contains("auth.test"));
    }
}
