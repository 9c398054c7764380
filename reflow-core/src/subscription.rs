// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Link between one subscriber and one source.
///
/// Both calls return immediately. Their effects are applied by whoever owns
/// production for this subscription, in the order the calls were made.
pub trait Subscription: Send + Sync {
    /// Asks for `n` more items. Demand is additive.
    ///
    /// `n == 0` is a protocol violation. It terminates the subscription with
    /// [`ReflowError::InvalidDemand`](crate::ReflowError::InvalidDemand)
    /// delivered through `on_error`, never as a panic on the calling thread.
    /// After a terminal signal this is a no-op.
    fn request(&self, n: u64);

    /// Stops production before the next item and completes the subscriber.
    ///
    /// Idempotent.
    fn cancel(&self);
}
