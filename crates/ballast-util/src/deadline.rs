//! Bound how long a caller waits for an asynchronous operation.

use derive_more::Display;
use std::{future::Future, panic, time::Duration};
use tokio::{task, time};
use tokio_util::sync::CancellationToken;

/// Why [`with_deadline`] or [`with_deadline_cancellable`] stopped waiting.
#[derive(Debug, Display, derive_more::Error, Eq, PartialEq)]
pub enum DeadlineError {
    /// The operation didn't complete within the deadline.
    #[display("deadline of {_0:?} exceeded")]
    Expired(#[error(not(source))] Duration),

    /// The caller's cancellation token fired while waiting.
    #[display("wait for operation cancelled")]
    Cancelled,
}

/// Wait for `operation` to complete, but no longer than `timeout`.
///
/// The operation is spawned as its own task and raced against a timer. If
/// the timer wins, the operation is *not* aborted: it keeps running in the
/// background until it completes on its own; only the caller's wait ends.
/// If the operation wins, the timer is torn down and its output is
/// returned. A panic inside the operation is resumed on the caller, so the
/// wrapper never masks the operation's own failure; an operation returning
/// `Result` surfaces here as `Ok(Err(_))`, its error channel untouched.
pub async fn with_deadline<T: Send + 'static>(
    operation: impl Future<Output = T> + Send + 'static,
    timeout: Duration,
) -> Result<T, DeadlineError> {
    let mut handle = task::spawn(operation);
    tokio::select! {
        result = &mut handle => Ok(finished(result)),
        _ = time::sleep(timeout) => Err(DeadlineError::Expired(timeout)),
    }
}

/// Like [`with_deadline`], but the caller's `token` can also end the wait.
///
/// Cancellation unwinds only this wrapper's waiting. It is never propagated
/// into the operation, which keeps running in the background just as on
/// deadline expiry.
pub async fn with_deadline_cancellable<T: Send + 'static>(
    operation: impl Future<Output = T> + Send + 'static,
    timeout: Duration,
    token: &CancellationToken,
) -> Result<T, DeadlineError> {
    let mut handle = task::spawn(operation);
    tokio::select! {
        result = &mut handle => Ok(finished(result)),
        _ = time::sleep(timeout) => Err(DeadlineError::Expired(timeout)),
        _ = token.cancelled() => Err(DeadlineError::Cancelled),
    }
}

fn finished<T>(result: Result<T, task::JoinError>) -> T {
    match result {
        Ok(value) => value,
        // We never abort the task, so the join can only fail with the
        // operation's own panic payload.
        Err(err) => panic::resume_unwind(err.into_panic()),
    }
}
