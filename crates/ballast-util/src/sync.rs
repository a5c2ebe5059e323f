//! Limit how many tasks may run a section of code at once.

use derive_more::Display;
use std::{num::NonZeroU32, sync::Arc};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio_util::sync::CancellationToken;

/// Returned by [`AsyncMutex::lock_cancellable`] when the caller's token fires
/// before a permit becomes available.
#[derive(Debug, Display, derive_more::Error)]
#[display("wait for lock cancelled")]
pub struct LockCancelled;

/// A mutual-exclusion region for tasks, with a configurable number of
/// concurrent holders.
///
/// Clones share the same permit store, so the usual pattern is to clone one
/// `AsyncMutex` into every task that needs the region. Waiters are served in
/// arrival order, a property inherited from the underlying
/// [`tokio::sync::Semaphore`]. Unlike a `std::sync::Mutex` guard, the
/// returned [`LockGuard`] may be held across `.await` points.
#[derive(Clone)]
pub struct AsyncMutex {
    semaphore: Arc<Semaphore>,
}

impl AsyncMutex {
    /// A region admitting one holder at a time.
    pub fn new() -> Self {
        Self::with_capacity(NonZeroU32::MIN)
    }

    /// A region admitting up to `capacity` holders at a time.
    pub fn with_capacity(capacity: NonZeroU32) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(
                usize::try_from(u32::from(capacity)).unwrap(),
            )),
        }
    }

    /// Wait for a permit. The returned guard holds the permit until it is
    /// dropped.
    pub async fn lock(&self) -> LockGuard {
        // The semaphore is never closed, so acquisition cannot fail.
        let permit = self.semaphore.clone().acquire_owned().await.unwrap();
        LockGuard { _permit: permit }
    }

    /// Wait for a permit, giving up when `token` fires first. Giving up
    /// while waiting consumes no permit: the abandoned acquisition just
    /// leaves the waiter queue.
    pub async fn lock_cancellable(
        &self,
        token: &CancellationToken,
    ) -> Result<LockGuard, LockCancelled> {
        tokio::select! {
            permit = self.semaphore.clone().acquire_owned() => {
                Ok(LockGuard { _permit: permit.unwrap() })
            }
            _ = token.cancelled() => Err(LockCancelled),
        }
    }
}

impl Default for AsyncMutex {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds one permit of an [`AsyncMutex`]. Dropping the guard releases the
/// permit, on every exit path including panic unwinds. A permit cannot be
/// released twice: the guard is a move-only value, consumed by its drop.
#[derive(Debug)]
pub struct LockGuard {
    _permit: OwnedSemaphorePermit,
}
