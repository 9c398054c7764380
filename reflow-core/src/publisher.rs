// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Subscriber;
use std::sync::Arc;

/// Producer side of the protocol.
///
/// Every `subscribe` call creates one fresh subscription bound to that
/// subscriber and delivers it through `on_subscribe` exactly once, before any
/// item. A publisher keeps no per-subscriber state of its own.
pub trait Publisher<T> {
    fn subscribe(&self, subscriber: Arc<dyn Subscriber<T>>);
}

/// A stage that is a subscriber upstream and a publisher downstream.
pub trait Processor<T, R>: Subscriber<T> + Publisher<R> {}

impl<P, T, R> Processor<T, R> for P where P: Subscriber<T> + Publisher<R> {}
