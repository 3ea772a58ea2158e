//! Per-call request context: cancellation plus an optional deadline.
//!
//! Every remote operation takes a [`RequestContext`]. The HTTP adapter aborts
//! an in-flight request when the context ends, and the rate-limit retry wait
//! stops early on it.

use crate::errors::{SlackError, SlackResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline carried through a logical operation
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that never ends on its own
    pub fn new() -> Self {
        Self::default()
    }

    /// A context driven by an existing cancellation token
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Set a deadline `timeout` from now, keeping an earlier deadline if one exists
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now() + timeout;
        self.with_deadline(deadline)
    }

    /// Set an absolute deadline, keeping an earlier deadline if one exists
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// A derived context: cancelled when this one is, cancellable on its own
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Cancel this context and every child derived from it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The underlying cancellation token
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The reason this context has ended, or `None` while it is still live
    pub fn err(&self) -> Option<SlackError> {
        if self.token.is_cancelled() {
            return Some(SlackError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(SlackError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Wait until the context ends and return why
    pub async fn done(&self) -> SlackError {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => SlackError::Cancelled,
                    _ = sleep_until(deadline) => SlackError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                SlackError::Cancelled
            }
        }
    }

    /// Drive `fut` to completion unless the context ends first.
    ///
    /// The future is dropped when the context ends, which aborts any
    /// request it had in flight.
    pub async fn run<F, T>(&self, fut: F) -> SlackResult<T>
    where
        F: Future<Output = SlackResult<T>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }
        tokio::select! {
            biased;
            err = self.done() => Err(err),
            res = fut => res,
        }
    }
}
