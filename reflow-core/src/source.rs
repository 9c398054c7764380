// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Result;

/// Item factory driven by a subscription.
///
/// Each call to [`produce`](Source::produce) yields one of:
///
/// - `Ok(Some(item))`: the next item;
/// - `Ok(None)`: the source is exhausted and must not be called again;
/// - `Err(error)`: production failed, no item exists for this call.
///
/// Closures returning `Result<Option<T>>` are sources:
///
/// ```
/// use reflow_core::{Result, Source};
///
/// let mut next = 0;
/// let mut countdown = move || -> Result<Option<u32>> {
///     next += 1;
///     Ok((next <= 2).then_some(next))
/// };
///
/// assert_eq!(countdown.produce().unwrap(), Some(1));
/// assert_eq!(countdown.produce().unwrap(), Some(2));
/// assert_eq!(countdown.produce().unwrap(), None);
/// ```
pub trait Source: Send + 'static {
    type Item: Send + 'static;

    fn produce(&mut self) -> Result<Option<Self::Item>>;

    /// Returns `true` once the source knows it has nothing left.
    ///
    /// Bounded sources override this so the subscriber is completed right
    /// after the last item instead of on the next request.
    fn is_exhausted(&self) -> bool {
        false
    }
}

impl<F, T> Source for F
where
    F: FnMut() -> Result<Option<T>> + Send + 'static,
    T: Send + 'static,
{
    type Item = T;

    fn produce(&mut self) -> Result<Option<T>> {
        self()
    }
}
