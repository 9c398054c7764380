// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::temp_info::TempInfo;
use parking_lot::Mutex;
use reflow_rx::{ReflowError, Subscriber, Subscription};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info};

/// How a town's feed ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEnd {
    Completed,
    Failed(String),
}

/// Final report of one town's feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOutcome {
    pub town: String,
    pub readings: Vec<TempInfo>,
    pub end: FeedEnd,
}

/// Subscriber pulling one reading at a time and logging each of them.
///
/// Reports the whole feed through a oneshot channel once a terminal signal
/// arrives, so the driver can wait for it.
pub struct TempSubscriber {
    town: String,
    subscription: Mutex<Option<Arc<dyn Subscription>>>,
    readings: Mutex<Vec<TempInfo>>,
    report: Mutex<Option<oneshot::Sender<FeedOutcome>>>,
}

impl TempSubscriber {
    pub fn new(town: impl Into<String>) -> (Arc<Self>, oneshot::Receiver<FeedOutcome>) {
        let (report, outcome) = oneshot::channel();
        let subscriber = Arc::new(Self {
            town: town.into(),
            subscription: Mutex::new(None),
            readings: Mutex::new(Vec::new()),
            report: Mutex::new(Some(report)),
        });
        (subscriber, outcome)
    }

    fn finish(&self, end: FeedEnd) {
        // Releases the worker, which holds this subscriber in turn
        self.subscription.lock().take();

        let outcome = FeedOutcome {
            town: self.town.clone(),
            readings: std::mem::take(&mut *self.readings.lock()),
            end,
        };
        if let Some(report) = self.report.lock().take() {
            let _ = report.send(outcome);
        }
    }
}

impl Subscriber<TempInfo> for TempSubscriber {
    fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
        // Stored before requesting, the first on_next may race this call
        *self.subscription.lock() = Some(subscription.clone());
        subscription.request(1);
    }

    fn on_next(&self, item: TempInfo) {
        info!("item = {}", item);
        self.readings.lock().push(item);

        let subscription = self.subscription.lock().clone();
        if let Some(subscription) = subscription {
            subscription.request(1);
        }
    }

    fn on_error(&self, error: ReflowError) {
        error!("{}: {}", self.town, error);
        self.finish(FeedEnd::Failed(error.to_string()));
    }

    fn on_complete(&self) {
        info!("{}: Done!", self.town);
        self.finish(FeedEnd::Completed);
    }
}
