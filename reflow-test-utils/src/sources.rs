// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic sources for driving subscriptions in tests.

use reflow_core::{ReflowError, Result, Source};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Message carried by errors from [`ErrorInjectingSource`].
pub const INJECTED_ERROR: &str = "Injected test error";

/// Source yielding a fixed list of items, then reporting exhaustion.
#[derive(Debug, Clone)]
pub struct BoundedSource<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> BoundedSource<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl<T: Send + 'static> Source for BoundedSource<T> {
    type Item = T;

    fn produce(&mut self) -> Result<Option<T>> {
        Ok(self.items.next())
    }

    fn is_exhausted(&self) -> bool {
        self.items.as_slice().is_empty()
    }
}

/// Endless source yielding `1, 2, 3, ...`.
#[derive(Debug, Clone, Default)]
pub struct CountingSource {
    next: u64,
}

impl Source for CountingSource {
    type Item = u64;

    fn produce(&mut self) -> Result<Option<u64>> {
        self.next += 1;
        Ok(Some(self.next))
    }
}

/// Wraps a source and fails its `fail_on`-th production call (1-based).
///
/// Calls before the failing one are forwarded. The failing call does not
/// reach the inner source, so no item is lost or produced for it.
#[derive(Debug, Clone)]
pub struct ErrorInjectingSource<S> {
    inner: S,
    fail_on: usize,
    calls: usize,
}

impl<S> ErrorInjectingSource<S> {
    pub const fn new(inner: S, fail_on: usize) -> Self {
        Self {
            inner,
            fail_on,
            calls: 0,
        }
    }
}

impl<S: Source> Source for ErrorInjectingSource<S> {
    type Item = S::Item;

    fn produce(&mut self) -> Result<Option<S::Item>> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(ReflowError::production_error(INJECTED_ERROR));
        }
        self.inner.produce()
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }
}

/// Wraps a source and counts how often it was asked to produce.
#[derive(Debug, Clone)]
pub struct CallCountingSource<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S> CallCountingSource<S> {
    /// Returns the wrapped source and a shared view of its call counter.
    pub fn new(inner: S) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl<S: Source> Source for CallCountingSource<S> {
    type Item = S::Item;

    fn produce(&mut self) -> Result<Option<S::Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.produce()
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }
}

pub fn bounded_source<T>(items: impl IntoIterator<Item = T>) -> BoundedSource<T> {
    BoundedSource::new(items)
}

/// Bounded source over `items` failing on the `fail_on`-th call.
pub fn failing_source<T>(
    items: impl IntoIterator<Item = T>,
    fail_on: usize,
) -> ErrorInjectingSource<BoundedSource<T>> {
    ErrorInjectingSource::new(BoundedSource::new(items), fail_on)
}
