// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Demand-driven subscription backed by one dedicated worker task.
//!
//! ```text
//! request(n) ──► [unbounded queue] ──► worker ──► source.produce() ──► on_next
//! cancel()   ──► token ──────────────┘            │
//!                                                 ├─► Ok(None) ──► on_complete
//!                                                 └─► Err(e)   ──► on_error
//! ```
//!
//! ## Rules
//! - `request` and `cancel` never block; they only enqueue or flip a flag.
//! - One worker per subscription: demand bookkeeping and delivery are confined
//!   to it, so increments and decrements never race and items keep production
//!   order.
//! - Cancellation is checked before every production step and again before
//!   every `on_next`.
//! - Exactly one terminal signal. The worker exits right after sending it,
//!   which turns later `request` calls into no-ops.

use crate::config::SubscriptionConfig;
use crate::worker::WorkerTask;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use reflow_core::{CancellationToken, Demand, ReflowError, Source, Subscriber, Subscription};
use std::sync::Arc;

/// Subscription whose production runs on its own worker task.
///
/// Dropping every handle cancels the subscription, exactly like [`cancel`](Subscription::cancel).
#[derive(Debug)]
pub struct WorkerSubscription {
    requests: UnboundedSender<u64>,
    task: WorkerTask,
}

impl WorkerSubscription {
    /// Spawns the worker that serves `subscriber` from `source`.
    ///
    /// The worker idles until the first `request`. The caller is responsible
    /// for handing the returned subscription to `subscriber.on_subscribe`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<S>(
        source: S,
        subscriber: Arc<dyn Subscriber<S::Item>>,
        config: SubscriptionConfig,
    ) -> Arc<Self>
    where
        S: Source,
    {
        let (requests, pending) = mpsc::unbounded();
        let task = WorkerTask::spawn(move |cancel| {
            Worker {
                source,
                subscriber,
                pending,
                cancel,
                config,
                demand: Demand::default(),
            }
            .run()
        });

        Arc::new(Self { requests, task })
    }

    pub fn is_cancelled(&self) -> bool {
        self.task.is_cancelled()
    }
}

impl Subscription for WorkerSubscription {
    fn request(&self, n: u64) {
        if self.requests.unbounded_send(n).is_err() {
            debug!("request({}) ignored: subscription already terminated", n);
        }
    }

    fn cancel(&self) {
        if self.task.cancel() {
            debug!("subscription cancelled");
        }
    }
}

enum Flow {
    Continue,
    Terminated,
}

struct Worker<S: Source> {
    source: S,
    subscriber: Arc<dyn Subscriber<S::Item>>,
    pending: UnboundedReceiver<u64>,
    cancel: CancellationToken,
    config: SubscriptionConfig,
    demand: Demand,
}

impl<S: Source> Worker<S> {
    async fn run(mut self) {
        loop {
            let requested = tokio::select! {
                biased;
                () = self.cancel.cancelled() => None,
                requested = self.pending.next() => requested,
            };

            let flow = match requested {
                // Closed queue means every handle is gone, which cancels as well
                None => self.complete_cancelled(),
                Some(0) => {
                    warn!("request(0) violates the demand protocol, terminating subscription");
                    self.subscriber.on_error(ReflowError::invalid_demand(0));
                    Flow::Terminated
                }
                Some(n) => {
                    self.demand.add(n);
                    self.drain().await
                }
            };

            if let Flow::Terminated = flow {
                break;
            }
        }

        debug!("subscription worker stopped");
    }

    async fn drain(&mut self) -> Flow {
        while self.demand.has_outstanding() {
            if self.cancel.is_cancelled() {
                return self.complete_cancelled();
            }

            if self.source.is_exhausted() {
                return self.complete_exhausted();
            }

            if let Some(interval) = self.config.interval() {
                tokio::select! {
                    biased;
                    () = self.cancel.cancelled() => return self.complete_cancelled(),
                    () = tokio::time::sleep(interval) => {}
                }
            }

            match self.source.produce() {
                Ok(Some(item)) => {
                    if self.cancel.is_cancelled() {
                        return self.complete_cancelled();
                    }
                    self.demand.try_take();
                    self.subscriber.on_next(item);
                }
                Ok(None) => return self.complete_exhausted(),
                Err(error) => {
                    debug!("source failed: {}", error);
                    self.subscriber.on_error(error);
                    return Flow::Terminated;
                }
            }

            if self.source.is_exhausted() {
                return self.complete_exhausted();
            }

            // Unbounded demand must not monopolize a runtime thread
            tokio::task::yield_now().await;
        }

        Flow::Continue
    }

    fn complete_cancelled(&self) -> Flow {
        debug!(
            "completing cancelled subscription with {} items outstanding",
            self.demand.outstanding()
        );
        self.subscriber.on_complete();
        Flow::Terminated
    }

    fn complete_exhausted(&self) -> Flow {
        self.subscriber.on_complete();
        Flow::Terminated
    }
}
