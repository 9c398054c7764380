// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transform stages sitting between a publisher and a subscriber.
//!
//! Every processor relays `on_subscribe` downstream unchanged, so the
//! downstream subscriber drives demand through the upstream subscription
//! itself. No processor buffers items.
//!
//! | processor | on_next | failure of the stage function |
//! |---|---|---|
//! | [`MapProcessor`] | forwards `f(item)` | panic, unrecoverable for the worker |
//! | [`TryMapProcessor`] | forwards `Ok` values | cancels upstream, one `on_error` downstream |
//! | [`FilterProcessor`] | forwards matching items, requests one more per dropped item | n/a |

mod filter;
mod map;
mod try_map;

pub use filter::FilterProcessor;
pub use map::MapProcessor;
pub use try_map::TryMapProcessor;

use parking_lot::Mutex;
use reflow_core::{Subscriber, Subscription};
use std::sync::{Arc, Weak};

// Handles are cloned out of the lock before any call, so a downstream that
// re-enters the processor never deadlocks.
struct Slot<S: ?Sized> {
    inner: Mutex<Option<Arc<S>>>,
}

impl<S: ?Sized> Slot<S> {
    const fn empty() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Stores `value`, returning `true` if a previous one was replaced.
    fn set(&self, value: Arc<S>) -> bool {
        self.inner.lock().replace(value).is_some()
    }

    fn get(&self) -> Option<Arc<S>> {
        self.inner.lock().clone()
    }
}

type Downstream<R> = Slot<dyn Subscriber<R>>;

// The worker owns this processor as its subscriber, so a strong handle here
// would keep the subscription alive after downstream dropped its own.
struct Upstream {
    inner: Mutex<Option<Weak<dyn Subscription>>>,
}

impl Upstream {
    const fn empty() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    fn set(&self, subscription: &Arc<dyn Subscription>) {
        *self.inner.lock() = Some(Arc::downgrade(subscription));
    }

    /// The upstream subscription, if downstream still holds a handle to it.
    fn get(&self) -> Option<Arc<dyn Subscription>> {
        self.inner.lock().as_ref().and_then(Weak::upgrade)
    }
}

fn attach<R>(downstream: &Downstream<R>, subscriber: Arc<dyn Subscriber<R>>, stage: &str) {
    if downstream.set(subscriber) {
        warn!("{}: downstream subscriber replaced", stage);
    }
}

fn downstream_or_warn<R>(
    downstream: &Downstream<R>,
    stage: &str,
    signal: &str,
) -> Option<Arc<dyn Subscriber<R>>> {
    let subscriber = downstream.get();
    if subscriber.is_none() {
        warn!("{}: {} dropped, no downstream subscriber", stage, signal);
    }
    subscriber
}
