//! Run a list of asynchronous operations strictly one at a time.

use std::future::Future;

/// Invoke each factory in order, awaiting its operation to completion
/// before the next factory is even invoked. No two operations are ever in
/// flight at once, so the returned values are in input order.
///
/// The first `Err` aborts the run: remaining factories are never invoked,
/// values from earlier operations are dropped, and the error propagates
/// unchanged. A caller that wants to keep going past failures can have each
/// factory return `Ok(Outcome::capture_async(op).await)` instead; that run
/// never fails early and yields one `Outcome` per step.
///
/// This is the strictly serial counterpart of `futures::future::join_all`.
pub async fn join_all_sequential<T, E, F, FutT>(
    factories: impl IntoIterator<Item = F>,
) -> Result<Vec<T>, E>
where
    F: FnOnce() -> FutT,
    FutT: Future<Output = Result<T, E>>,
{
    let mut values = vec![];
    for factory in factories {
        values.push(factory().await?);
    }
    Ok(values)
}
