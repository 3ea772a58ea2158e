//! Rate-limit retry loop.
//!
//! Slack tells us how long to back off via `Retry-After`; that duration is
//! honoured verbatim on every attempt. There is no attempt cap: the only way
//! out of a sustained rate limit is the request context ending.

use crate::context::RequestContext;
use crate::errors::{SlackError, SlackResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Server-requested wait if `error` is a rate limit, `None` for anything else
pub fn rate_limit_delay(error: &SlackError) -> Option<Duration> {
    error.retry_after()
}

/// Run `call` until it stops being rate limited.
///
/// Each rate-limit failure waits for its reported `retry_after` and then
/// repeats the identical call. If the context ends during a wait the context
/// error ([`SlackError::Cancelled`] or [`SlackError::DeadlineExceeded`]) is
/// returned instead of the rate-limit error. Any other failure is returned
/// unchanged on the spot.
pub async fn retry_rate_limited<F, Fut, T>(
    ctx: &RequestContext,
    operation: &str,
    mut call: F,
) -> SlackResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = SlackResult<T>>,
{
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let error = match call().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(operation, attempt, "Operation succeeded after rate limiting");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        let Some(delay) = rate_limit_delay(&error) else {
            return Err(error);
        };

        debug!(
            operation,
            attempt,
            delay_ms = delay.as_millis() as u64,
            "Rate limited, waiting before retrying"
        );

        tokio::select! {
            biased;
            reason = ctx.done() => {
                warn!(operation, attempt, error = %reason, "Gave up waiting out rate limit");
                return Err(reason);
            }
            _ = sleep(delay) => {}
        }
    }
}
