// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::SubscriptionConfig;
use crate::subscription::WorkerSubscription;
use reflow_core::{Publisher, Source, Subscriber};
use std::sync::Arc;

/// Cold publisher that serves every subscriber from its own fresh source.
///
/// `factory` is called once per `subscribe`, so two subscribers never share
/// source state and observe independent sequences.
///
/// ```rust,no_run
/// use reflow_core::{Publisher, Result};
/// use reflow_exec::SourcePublisher;
///
/// let readings = SourcePublisher::new(|| {
///     let mut next = 0_u32;
///     move || -> Result<Option<u32>> {
///         next += 1;
///         Ok(Some(next))
///     }
/// });
/// # let _ = readings;
/// ```
pub struct SourcePublisher<F> {
    factory: F,
    config: SubscriptionConfig,
}

impl<F, S> SourcePublisher<F>
where
    F: Fn() -> S,
    S: Source,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            config: SubscriptionConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: SubscriptionConfig) -> Self {
        self.config = config;
        self
    }

    pub const fn config(&self) -> &SubscriptionConfig {
        &self.config
    }
}

impl<F, S> Publisher<S::Item> for SourcePublisher<F>
where
    F: Fn() -> S,
    S: Source,
{
    /// Spawns the subscription worker, then hands it to `on_subscribe`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<S::Item>>) {
        let subscription =
            WorkerSubscription::spawn((self.factory)(), subscriber.clone(), self.config);
        subscriber.on_subscribe(subscription);
    }
}
