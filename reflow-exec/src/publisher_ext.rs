// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Publisher combinators inserting a processor per subscription.
//!
//! ```text
//! subscribe(s) ──► new processor ──► processor.subscribe(s)
//!                                └─► upstream.subscribe(processor)
//! ```

use crate::pipeline::Pipeline;
use crate::processor::{FilterProcessor, MapProcessor, TryMapProcessor};
use reflow_core::{Publisher, Result, Subscriber};
use std::sync::Arc;

/// Extension trait adding processor stages to any [`Publisher`].
pub trait PublisherExt<T>: Publisher<T> + Sized {
    /// Transforms every item with `transform`.
    fn map<R, F>(self, transform: F) -> Mapped<Self, T, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Mapped {
            upstream: self,
            transform: Arc::new(transform),
        }
    }

    /// Transforms every item with a fallible `transform`.
    ///
    /// The first failure cancels upstream and terminates the subscriber with that error.
    fn try_map<R, F>(self, transform: F) -> TryMapped<Self, T, R>
    where
        F: Fn(T) -> Result<R> + Send + Sync + 'static,
    {
        TryMapped {
            upstream: self,
            transform: Arc::new(transform),
        }
    }

    /// Keeps only items matching `predicate`, replenishing demand for dropped ones.
    fn filter<F>(self, predicate: F) -> Filtered<Self, T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Filtered {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }

    /// Runs every item through `pipeline`.
    fn pipe(self, pipeline: Pipeline<T>) -> Mapped<Self, T, T>
    where
        T: 'static,
    {
        self.map(move |item| pipeline.apply(item))
    }
}

impl<P, T> PublisherExt<T> for P where P: Publisher<T> {}

/// Publisher returned by [`PublisherExt::map`].
pub struct Mapped<P, T, R> {
    upstream: P,
    transform: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<P, T, R> Publisher<R> for Mapped<P, T, R>
where
    P: Publisher<T>,
    T: 'static,
    R: 'static,
{
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<R>>) {
        let processor = Arc::new(MapProcessor::from_shared(self.transform.clone()));
        processor.subscribe(subscriber);
        self.upstream.subscribe(processor);
    }
}

/// Publisher returned by [`PublisherExt::try_map`].
pub struct TryMapped<P, T, R> {
    upstream: P,
    transform: Arc<dyn Fn(T) -> Result<R> + Send + Sync>,
}

impl<P, T, R> Publisher<R> for TryMapped<P, T, R>
where
    P: Publisher<T>,
    T: 'static,
    R: 'static,
{
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<R>>) {
        let processor = Arc::new(TryMapProcessor::from_shared(self.transform.clone()));
        processor.subscribe(subscriber);
        self.upstream.subscribe(processor);
    }
}

/// Publisher returned by [`PublisherExt::filter`].
pub struct Filtered<P, T> {
    upstream: P,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<P, T> Publisher<T> for Filtered<P, T>
where
    P: Publisher<T>,
    T: 'static,
{
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<T>>) {
        let processor = Arc::new(FilterProcessor::from_shared(self.predicate.clone()));
        processor.subscribe(subscriber);
        self.upstream.subscribe(processor);
    }
}
