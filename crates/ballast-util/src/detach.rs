//! Launch an asynchronous operation without waiting for it.

use anyhow::{Error, Result};
use slog::{error, Logger};
use std::future::Future;
use tokio::task;

/// Spawn `operation` and return immediately, without giving the caller any
/// way to wait for it. If the operation fails, `on_error` is invoked exactly
/// once with the original error; the failure never reaches the caller's own
/// control flow.
///
/// The error sink is required. A caller that genuinely wants to discard
/// failures writes `detach(operation, |_| ())`, which is visible in review,
/// or uses [`detach_logged`] to at least leave a log record.
pub fn detach(
    operation: impl Future<Output = Result<()>> + Send + 'static,
    on_error: impl FnOnce(Error) + Send + 'static,
) {
    task::spawn(async move {
        if let Err(err) = operation.await {
            on_error(err);
        }
    });
}

/// [`detach`] with the standard error sink: the failure is reported through
/// `log` at error level.
pub fn detach_logged(log: &Logger, operation: impl Future<Output = Result<()>> + Send + 'static) {
    let log = log.clone();
    detach(operation, move |err| {
        error!(log, "detached operation failed"; "error" => %err);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::test_logger;
    use anyhow::anyhow;
    use std::time::Duration;
    use tokio::{sync::mpsc, time};

    #[tokio::test]
    async fn failure_reaches_the_sink_exactly_once_with_the_original_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        detach(
            async { Err(anyhow!("it broke")) },
            move |err| tx.send(err.to_string()).unwrap(),
        );
        assert_eq!(rx.recv().await.unwrap(), "it broke");
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn success_never_invokes_the_sink() {
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        detach(async { Ok(()) }, move |err| {
            tx.send(err.to_string()).unwrap();
        });
        // The sender is dropped, invoked or not, once the detached task
        // finishes.
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn caller_is_not_suspended() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        detach(
            async {
                time::sleep(Duration::from_millis(50)).await;
                Err(anyhow!("late failure"))
            },
            move |err| tx.send(err.to_string()).unwrap(),
        );
        // Still here: the slow operation is running behind us.
        assert!(rx.try_recv().is_err());
        assert_eq!(rx.recv().await.unwrap(), "late failure");
    }

    #[tokio::test]
    async fn detach_logged_reports_and_returns() {
        detach_logged(&test_logger(), async { Err(anyhow!("logged failure")) });
        detach_logged(&test_logger(), async { Ok(()) });
        time::sleep(Duration::from_millis(10)).await;
    }
}
