// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning iterables into publishers.

use reflow_core::{Result, Source};
use reflow_exec::{SourcePublisher, SubscriptionConfig};

/// Source draining an iterator, one item per production step.
///
/// Keeps the upcoming item prefetched so exhaustion is known as soon as the
/// last item has been produced, and the subscriber sees `on_complete` right
/// after it without having to request again.
pub struct IterSource<I: Iterator> {
    iter: I,
    upcoming: Option<I::Item>,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        let mut iter = iter.into_iter();
        let upcoming = iter.next();
        Self { iter, upcoming }
    }
}

impl<I> Source for IterSource<I>
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
{
    type Item = I::Item;

    fn produce(&mut self) -> Result<Option<I::Item>> {
        let current = self.upcoming.take();
        if current.is_some() {
            self.upcoming = self.iter.next();
        }
        Ok(current)
    }

    fn is_exhausted(&self) -> bool {
        self.upcoming.is_none()
    }
}

/// Factory type behind [`IntoPublisher`] publishers.
pub type IterFactory<C> = Box<dyn Fn() -> IterSource<<C as IntoIterator>::IntoIter> + Send + Sync>;

/// Extension trait turning a cloneable iterable into a cold publisher.
pub trait IntoPublisher: IntoIterator + Clone + Send + Sync + 'static
where
    Self::IntoIter: Send + 'static,
    Self::Item: Send + 'static,
{
    /// Publisher replaying a fresh clone of `self` to every subscriber.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflow_rx::prelude::*;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let towns = vec!["New York", "Chicago"].into_publisher();
    /// # let _ = towns;
    /// # }
    /// ```
    fn into_publisher(self) -> SourcePublisher<IterFactory<Self>> {
        self.into_publisher_with(SubscriptionConfig::default())
    }

    /// Same as [`into_publisher`](Self::into_publisher) with explicit subscription settings.
    fn into_publisher_with(self, config: SubscriptionConfig) -> SourcePublisher<IterFactory<Self>> {
        let factory: IterFactory<Self> = Box::new(move || IterSource::new(self.clone()));
        SourcePublisher::new(factory).with_config(config)
    }
}

impl<C> IntoPublisher for C
where
    C: IntoIterator + Clone + Send + Sync + 'static,
    C::IntoIter: Send + 'static,
    C::Item: Send + 'static,
{
}
