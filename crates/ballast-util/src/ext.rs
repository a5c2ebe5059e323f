//! Method-call sugar over the free functions in this crate, so wrappers can
//! be tacked onto the end of a future expression instead of wrapped around
//! it.

use crate::{
    deadline::{self, DeadlineError},
    detach,
};
use ballast_base::Outcome;
use slog::Logger;
use std::{fmt::Display, future::Future, time::Duration};
use tokio_util::sync::CancellationToken;

/// Extension methods on every future. Each forwards to the free function of
/// the same shape; no new semantics live here.
pub trait BallastFutureExt: Future {
    /// Method form of [`deadline::with_deadline`].
    fn with_deadline(
        self,
        timeout: Duration,
    ) -> impl Future<Output = Result<Self::Output, DeadlineError>> + Send
    where
        Self: Sized + Send + 'static,
        Self::Output: Send + 'static,
    {
        deadline::with_deadline(self, timeout)
    }

    /// Method form of [`deadline::with_deadline_cancellable`].
    fn with_deadline_cancellable(
        self,
        timeout: Duration,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Self::Output, DeadlineError>> + Send
    where
        Self: Sized + Send + 'static,
        Self::Output: Send + 'static,
    {
        deadline::with_deadline_cancellable(self, timeout, token)
    }

    /// Method form of [`Outcome::capture_async`].
    fn into_outcome<T, E>(self) -> impl Future<Output = Outcome<T>>
    where
        Self: Future<Output = Result<T, E>> + Sized,
        E: Display,
    {
        Outcome::capture_async(self)
    }

    /// Method form of [`detach::detach`].
    fn detached(self, on_error: impl FnOnce(anyhow::Error) + Send + 'static)
    where
        Self: Future<Output = anyhow::Result<()>> + Sized + Send + 'static,
    {
        detach::detach(self, on_error)
    }

    /// Method form of [`detach::detach_logged`].
    fn detached_logged(self, log: &Logger)
    where
        Self: Future<Output = anyhow::Result<()>> + Sized + Send + 'static,
    {
        detach::detach_logged(log, self)
    }
}

impl<FutT: Future> BallastFutureExt for FutT {}
