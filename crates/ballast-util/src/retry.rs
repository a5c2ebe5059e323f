//! Re-run a failing asynchronous operation a bounded number of times, with
//! an optional exponential backoff between attempts.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::{future::Future, time::Duration};
use tokio::time;

/// How [`retry`] and [`retry_if`] behave between attempts.
///
/// Plain data, so applications can embed it in their configuration files.
/// The delay serializes as `initial_delay_ms`.
#[serde_as]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    #[serde_as(as = "DurationMilliSeconds")]
    #[serde(rename = "initial_delay_ms")]
    pub initial_delay: Duration,
    pub exponential_backoff: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
            exponential_backoff: true,
        }
    }
}

impl RetryPolicy {
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    pub fn exponential_backoff(mut self, exponential_backoff: bool) -> Self {
        self.exponential_backoff = exponential_backoff;
        self
    }
}

/// Run `operation`, re-invoking it after each failure until it succeeds or
/// the policy's retry budget is spent.
///
/// The first invocation doesn't count against the budget: `max_retries = n`
/// allows up to `n + 1` invocations in total. Between attempts the current
/// delay is slept, then doubled when the policy enables backoff. Attempts
/// are strictly serialized. When the budget runs out the last attempt's
/// error is returned unchanged.
pub async fn retry<T, E, FutT>(
    policy: &RetryPolicy,
    operation: impl FnMut() -> FutT,
) -> Result<T, E>
where
    FutT: Future<Output = Result<T, E>>,
{
    retry_if(policy, |_| true, operation).await
}

/// Like [`retry`], but only errors `filter` accepts are retried. A rejected
/// error is returned immediately, unchanged, without sleeping or spending
/// retry budget.
pub async fn retry_if<T, E, FutT>(
    policy: &RetryPolicy,
    mut filter: impl FnMut(&E) -> bool,
    mut operation: impl FnMut() -> FutT,
) -> Result<T, E>
where
    FutT: Future<Output = Result<T, E>>,
{
    let mut delay = policy.initial_delay;
    let mut retries_used = 0;
    loop {
        match operation().await {
            Ok(value) => {
                return Ok(value);
            }
            Err(err) => {
                if retries_used == policy.max_retries || !filter(&err) {
                    return Err(err);
                }
                retries_used += 1;
                time::sleep(delay).await;
                if policy.exponential_backoff {
                    delay *= 2;
                }
            }
        }
    }
}
