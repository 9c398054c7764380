// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{attach, downstream_or_warn, Downstream, Slot};
use reflow_core::{Publisher, ReflowError, Subscriber, Subscription};
use std::sync::Arc;

const STAGE: &str = "map";

/// One-to-one relay applying a pure transform to every item.
///
/// A panic inside the transform is not caught: it takes down the worker
/// delivering the item and no terminal signal follows. Use
/// [`TryMapProcessor`](super::TryMapProcessor) when the transform can fail.
///
/// Wire it by hand, subscriber first:
///
/// ```rust,no_run
/// use reflow_core::{Publisher, Subscriber};
/// use reflow_exec::MapProcessor;
/// use std::sync::Arc;
///
/// fn celsius(downstream: Arc<dyn Subscriber<f64>>, upstream: &dyn Publisher<f64>) {
///     let processor = Arc::new(MapProcessor::new(|f: f64| (f - 32.0) * 5.0 / 9.0));
///     processor.subscribe(downstream);
///     upstream.subscribe(processor);
/// }
/// ```
pub struct MapProcessor<T, R> {
    transform: Arc<dyn Fn(T) -> R + Send + Sync>,
    downstream: Downstream<R>,
}

impl<T, R> MapProcessor<T, R> {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(transform))
    }

    pub(crate) fn from_shared(transform: Arc<dyn Fn(T) -> R + Send + Sync>) -> Self {
        Self {
            transform,
            downstream: Slot::empty(),
        }
    }
}

impl<T, R> Subscriber<T> for MapProcessor<T, R> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_subscribe") {
            downstream.on_subscribe(subscription);
        }
    }

    fn on_next(&self, item: T) {
        if let Some(downstream) = downstream_or_warn(&self.downstream, STAGE, "on_next") {
            downstream.on_next((self.transform)(item));
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

impl<T, R> Publisher<R> for MapProcessor<T, R> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<R>>) {
        attach(&self.downstream, subscriber, STAGE);
    }
}
