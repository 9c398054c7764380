// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{attach, downstream_or_warn, Downstream, Slot, Upstream};
use reflow_core::{Publisher, ReflowError, Subscriber, Subscription};
use std::sync::Arc;

const STAGE: &str = "filter";

/// Relay forwarding only the items matching a predicate.
///
/// Each dropped item consumed one unit of the downstream's demand, so the
/// processor requests one replacement item upstream for it. Downstream still
/// receives as many items as it asked for, unless the source ends first.
pub struct FilterProcessor<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    downstream: Downstream<T>,
    upstream: Upstream,
}

impl<T> FilterProcessor<T> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(predicate))
    }

    pub(crate) fn from_shared(predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>) -> Self {
        Self {
            predicate,
            downstream: Slot::empty(),
            upstream: Upstream::empty(),
        }
    }
}

impl<T> Subscriber<T> for FilterProcessor<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        self.upstream.set(&subscription);
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_subscribe") {
            downstream.on_subscribe(subscription);
        }
    }

    fn on_next(&self, item: T) {
        if (self.predicate)(&item) {
            if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_next") {
                downstream.on_next(item);
            }
        } else if let Some(upstream) = self.upstream.get() {
            upstream.request(1);
        }
    }

    fn on_error(&self, error: ReflowError) {
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_error") {
            downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_complete") {
            downstream.on_complete();
        }
    }
}

impl<T> Publisher<T> for FilterProcessor<T> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<T>>) {
        attach(&self.downstream, subscriber, STAGE);
    }
}
