// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{attach, downstream_or_warn, Downstream, Slot, Upstream};
use reflow_core::{Publisher, ReflowError, Result, Subscriber, Subscription};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const STAGE: &str = "try_map";

/// Relay whose transform may reject an item.
///
/// On the first `Err` the processor cancels upstream, delivers that error
/// downstream as the terminal signal and ignores everything upstream sends
/// afterwards, including the `on_complete` that follows the cancel.
pub struct TryMapProcessor<T, R> {
    transform: Arc<dyn Fn(T) -> Result<R> + Send + Sync>,
    downstream: Downstream<R>,
    upstream: Upstream,
    terminated: AtomicBool,
}

impl<T, R> TryMapProcessor<T, R> {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(transform))
    }

    pub(crate) fn from_shared(transform: Arc<dyn Fn(T) -> Result<R> + Send + Sync>) -> Self {
        Self {
            transform,
            downstream: Slot::empty(),
            upstream: Upstream::empty(),
            terminated: AtomicBool::new(false),
        }
    }

    /// Returns `true` for the single caller allowed to emit the terminal signal.
    fn terminate(&self) -> bool {
        !self.terminated.swap(true, Ordering::AcqRel)
    }

    fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }
}

impl<T, R> Subscriber<T> for TryMapProcessor<T, R> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        self.upstream.set(&subscription);
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_subscribe") {
            downstream.on_subscribe(subscription);
        }
    }

    fn on_next(&self, item: T) {
        if self.is_terminated() {
            return;
        }

        match (self.transform)(item) {
            Ok(value) => {
                if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_next") {
                    downstream.on_next(value);
                }
            }
            Err(error) => {
                if !self.terminate() {
                    return;
                }
                debug!("try_map: transform failed, cancelling upstream: {}", error);
                if let Some(upstream) = self.upstream.get() {
                    upstream.cancel();
                }
                if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_error") {
                    downstream.on_error(error);
                }
            }
        }
    }

    fn on_error(&self, error: ReflowError) {
        if !self.terminate() {
            return;
        }
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_error") {
            downstream.on_error(error);
        }
    }

    fn on_complete(&self) {
        if !self.terminate() {
            return;
        }
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_complete") {
            downstream.on_complete();
        }
    }
}

impl<T, R> Publisher<R> for TryMapProcessor<T, R> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<R>>) {
        attach(&self.downstream, subscriber, STAGE);
    }
}
