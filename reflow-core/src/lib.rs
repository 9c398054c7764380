// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Protocol traits and shared types for demand-driven reactive streams.
//!
//! The protocol has four verbs on the consumer side (`on_subscribe`, `on_next`,
//! `on_error`, `on_complete`), two on the subscription (`request`, `cancel`) and
//! one on the producer (`subscribe`). Executors live in `reflow-exec`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod demand;
pub mod error;
pub mod publisher;
pub mod source;
pub mod subscriber;
pub mod subscription;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::demand::Demand;
pub use self::error::{IntoReflowError, ReflowError, Result, ResultExt};
pub use self::publisher::{Processor, Publisher};
pub use self::source::Source;
pub use self::subscriber::Subscriber;
pub use self::subscription::Subscription;
