// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Reflow
//!
//! Demand-driven reactive streams: publishers only produce what subscribers
//! asked for, every subscription runs on its own worker, and every stream ends
//! with exactly one terminal signal.
//!
//! ## Overview
//!
//! - **Protocol** (`reflow-core`): [`Publisher`], [`Subscriber`], [`Subscription`],
//!   [`Processor`], and the [`Source`] a publisher draws items from.
//! - **Execution** (`reflow-exec`): [`SourcePublisher`] and the worker-backed
//!   subscription behind it, plus `map`, `try_map`, `filter` and `pipe` stages
//!   through [`PublisherExt`].
//! - **Cells** (`reflow-cell`): synchronous push-only [`SimpleCell`] and
//!   [`ArithmeticCell`] networks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reflow_rx::prelude::*;
//! use std::sync::{Arc, OnceLock};
//! use tokio::sync::Notify;
//!
//! #[derive(Default)]
//! struct Printer {
//!     // Dropping the last handle cancels the subscription
//!     subscription: OnceLock<Arc<dyn Subscription>>,
//!     done: Notify,
//! }
//!
//! impl Subscriber<i32> for Printer {
//!     fn on_subscribe(&self, subscription: Arc<dyn Subscription>) {
//!         let _ = self.subscription.set(subscription.clone());
//!         subscription.request(u64::MAX);
//!     }
//!     fn on_next(&self, item: i32) {
//!         println!("item = {item}");
//!     }
//!     fn on_error(&self, error: ReflowError) {
//!         eprintln!("{error}");
//!         self.done.notify_one();
//!     }
//!     fn on_complete(&self) {
//!         println!("Done!");
//!         self.done.notify_one();
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let celsius = vec![32, 50, 212]
//!         .into_publisher()
//!         .map(|f: i32| (f - 32) * 5 / 9);
//!     let printer = Arc::new(Printer::default());
//!     celsius.subscribe(printer.clone());
//!     printer.done.notified().await;
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod iter_ext;

pub use reflow_core::{
    CancellationToken, Demand, IntoReflowError, Processor, Publisher, ReflowError, Result,
    ResultExt, Source, Subscriber, Subscription,
};

pub use reflow_exec::{
    FilterProcessor, Filtered, MapProcessor, Mapped, Pipeline, PublisherExt, SourcePublisher,
    SubscriptionConfig, TryMapProcessor, TryMapped, WorkerSubscription, WorkerTask,
};

pub use reflow_cell::{ArithmeticCell, CellCallback, SimpleCell};

pub use iter_ext::{IntoPublisher, IterSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::iter_ext::IntoPublisher;
    pub use reflow_cell::{ArithmeticCell, SimpleCell};
    pub use reflow_core::{Publisher, ReflowError, Result, Source, Subscriber, Subscription};
    pub use reflow_exec::{Pipeline, PublisherExt, SourcePublisher, SubscriptionConfig};
}
