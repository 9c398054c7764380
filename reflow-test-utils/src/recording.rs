// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscriber that records every signal it receives.

use parking_lot::Mutex;
use reflow_core::{ReflowError, Subscriber, Subscription};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// One protocol call observed by a [`RecordingSubscriber`].
#[derive(Debug, Clone)]
pub enum Signal<T> {
    Subscribed,
    Next(T),
    Error(ReflowError),
    Complete,
}

impl<T> Signal<T> {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Complete)
    }
}

impl<T: PartialEq> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Subscribed, Self::Subscribed) | (Self::Complete, Self::Complete) => true,
            (Self::Next(a), Self::Next(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// How much demand a [`RecordingSubscriber`] signals on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestPolicy {
    /// Requested from inside `on_subscribe` (0 = nothing)
    pub initial: u64,
    /// Requested from inside every `on_next` (0 = nothing)
    pub per_item: u64,
}

/// Subscriber recording every signal in arrival order.
///
/// Keeps the subscription so tests can drive demand and cancellation, and
/// optionally requests on its own according to a [`RequestPolicy`].
///
/// ```rust,no_run
/// use reflow_test_utils::RecordingSubscriber;
///
/// let subscriber = RecordingSubscriber::<i32>::one_at_a_time();
/// assert!(subscriber.signals().is_empty());
/// ```
pub struct RecordingSubscriber<T> {
    policy: RequestPolicy,
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    signals: Mutex<Vec<Signal<T>>>,
    changed: Notify,
}

impl<T: Clone + Send + 'static> RecordingSubscriber<T> {
    /// Records signals without requesting anything on its own.
    pub fn passive() -> Arc<Self> {
        Self::with_policy(RequestPolicy::default())
    }

    /// Requests `n` items from `on_subscribe` and nothing afterwards.
    pub fn requesting(n: u64) -> Arc<Self> {
        Self::with_policy(RequestPolicy {
            initial: n,
            per_item: 0,
        })
    }

    /// Requests one item on subscribe and one more after each item.
    pub fn one_at_a_time() -> Arc<Self> {
        Self::with_policy(RequestPolicy {
            initial: 1,
            per_item: 1,
        })
    }

    pub fn with_policy(policy: RequestPolicy) -> Arc<Self> {
        Arc::new(Self {
            policy,
            subscription: Mutex::new(None),
            signals: Mutex::new(Vec::new()),
            changed: Notify::new(),
        })
    }

    /// Requests `n` items through the stored subscription.
    ///
    /// # Panics
    ///
    /// Panics if `on_subscribe` has not been received yet.
    pub fn request(&self, n: u64) {
        self.subscription().request(n);
    }

    /// Cancels the stored subscription.
    ///
    /// # Panics
    ///
    /// Panics if `on_subscribe` has not been received yet.
    pub fn cancel(&self) {
        self.subscription().cancel();
    }

    /// Returns `true` once `on_subscribe` has been received.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.lock().is_some()
    }

    /// Forgets the stored subscription handle.
    pub fn drop_subscription(&self) {
        self.subscription.lock().take();
    }

    pub fn signals(&self) -> Vec<Signal<T>> {
        self.signals.lock().clone()
    }

    /// Items received through `on_next`, in order.
    pub fn values(&self) -> Vec<T> {
        self.signals
            .lock()
            .iter()
            .filter_map(|signal| match signal {
                Signal::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<ReflowError> {
        self.signals
            .lock()
            .iter()
            .filter_map(|signal| match signal {
                Signal::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.signals
            .lock()
            .iter()
            .filter(|signal| matches!(signal, Signal::Complete))
            .count()
    }

    pub fn is_terminated(&self) -> bool {
        self.signals.lock().iter().any(Signal::is_terminal)
    }

    /// Waits until at least `count` signals were recorded.
    ///
    /// # Panics
    ///
    /// Panics if `timeout` elapses first.
    pub async fn wait_for_signals(&self, count: usize, timeout: Duration) -> Vec<Signal<T>> {
        self.wait_until(|signals| signals.len() >= count, timeout, "signal count")
            .await
    }

    /// Waits for `on_error` or `on_complete`.
    ///
    /// # Panics
    ///
    /// Panics if `timeout` elapses first.
    pub async fn wait_for_terminal(&self, timeout: Duration) -> Vec<Signal<T>> {
        self.wait_until(
            |signals| signals.iter().any(Signal::is_terminal),
            timeout,
            "terminal signal",
        )
        .await
    }

    async fn wait_until<P>(&self, done: P, timeout: Duration, what: &str) -> Vec<Signal<T>>
    where
        P: Fn(&[Signal<T>]) -> bool,
    {
        let wait = async {
            loop {
                // Registered before checking, so a signal landing in between still wakes us
                let changed = self.changed.notified();
                {
                    let signals = self.signals.lock();
                    if done(&signals) {
                        return signals.clone();
                    }
                }
                changed.await;
            }
        };

        match tokio::time::timeout(timeout, wait).await {
            Ok(signals) => signals,
            Err(_) => panic!(
                "timed out after {timeout:?} waiting for {what}, recorded {} signals",
                self.signals.lock().len()
            ),
        }
    }

    fn subscription(&self) -> Arc<dyn Subscription> {
        self.subscription
            .lock()
            .clone()
            .expect("on_subscribe has not been received")
    }

    fn record(&self, signal: Signal<T>) {
        self.signals.lock().push(signal);
        self.changed.notify_waiters();
    }
}

impl<T: Clone + Send + 'static> Subscriber<T> for RecordingSubscriber<T> {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        *self.subscription.lock() = Some(subscription.clone());
        self.record(Signal::Subscribed);
        if self.policy.initial > 0 {
            subscription.request(self.policy.initial);
        }
    }

    fn on_next(&self, item: T) {
        self.record(Signal::Next(item));
        if self.policy.per_item == 0 {
            return;
        }
        let subscription = self.subscription.lock().clone();
        if let Some(subscription) = subscription {
            subscription.request(self.policy.per_item);
        }
    }

    fn on_error(&self, error: ReflowError) {
        self.record(Signal::Error(error));
    }

    fn on_complete(&self) {
        self.record(Signal::Complete);
    }
}
