// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

/// Per-subscription execution settings shared by every subscription of a publisher.
///
/// ```
/// use reflow_exec::SubscriptionConfig;
/// use std::time::Duration;
///
/// let config = SubscriptionConfig::default().with_interval(Duration::from_millis(250));
/// assert_eq!(config.interval(), Some(Duration::from_millis(250)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptionConfig {
    interval: Option<Duration>,
}

impl SubscriptionConfig {
    /// Waits `interval` before producing each item, like a ticking feed.
    ///
    /// Cancellation is checked again after every wait.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    pub const fn interval(&self) -> Option<Duration> {
        self.interval
    }
}
