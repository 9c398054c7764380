// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReflowError, Subscription};
use std::sync::Arc;

/// Consumer side of the protocol.
///
/// Signals arrive in this order:
///
/// ```text
/// on_subscribe ─► on_next* ─► (on_error | on_complete)
/// ```
///
/// - `on_subscribe` is delivered exactly once, before anything else. Keep the
///   subscription: nothing is produced until you call
///   [`request`](Subscription::request), and dropping every handle cancels it.
/// - `on_next` is delivered at most as many times as items were requested.
/// - Exactly one terminal signal is delivered per subscription, and nothing
///   follows it.
///
/// Signals may arrive on a worker thread, hence the `Send + Sync` bound and
/// `&self` receivers. Implementors keep their state behind a lock.
pub trait Subscriber<T>: Send + Sync {
    /// Receives the subscription that drives this subscriber's demand.
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>);

    /// Receives the next item.
    fn on_next(&self, item: T);

    /// Terminal failure.
    fn on_error(&self, error: ReflowError);

    /// Terminal success (exhaustion or graceful cancel).
    fn on_complete(&self);
}
