// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Executors for the reflow protocol.
//!
//! - [`SourcePublisher`] turns a source factory into a cold publisher.
//! - [`WorkerSubscription`] runs production for one subscriber on a dedicated worker.
//! - [`MapProcessor`], [`TryMapProcessor`] and [`FilterProcessor`] are transform stages,
//!   usually inserted through [`PublisherExt`].
//! - [`Pipeline`] composes pure transforms in order.
//!
//! # Runtime Requirements
//!
//! Subscriptions spawn their worker on tokio and require the `runtime-tokio`
//! feature (default). Processors and pipelines work without it.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod config;
pub mod pipeline;
pub mod processor;
pub mod publisher_ext;

#[cfg(feature = "runtime-tokio")]
pub mod publisher;
#[cfg(feature = "runtime-tokio")]
pub mod subscription;
#[cfg(feature = "runtime-tokio")]
pub mod worker;

pub use config::SubscriptionConfig;
pub use pipeline::Pipeline;
pub use processor::{FilterProcessor, MapProcessor, TryMapProcessor};
pub use publisher_ext::{Filtered, Mapped, PublisherExt, TryMapped};

#[cfg(feature = "runtime-tokio")]
pub use publisher::SourcePublisher;
#[cfg(feature = "runtime-tokio")]
pub use subscription::WorkerSubscription;
#[cfg(feature = "runtime-tokio")]
pub use worker::WorkerTask;
