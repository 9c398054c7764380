// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recording::RecordingSubscriber;
use std::time::Duration;
use tokio::time::sleep;

/// Default wait used by the workspace tests before declaring a hang.
pub const TIMEOUT: Duration = Duration::from_secs(2);

/// Asserts that `subscriber` records nothing new during `timeout_ms`.
pub async fn assert_no_signal_emitted<T>(subscriber: &RecordingSubscriber<T>, timeout_ms: u64)
where
    T: Clone + Send + std::fmt::Debug + 'static,
{
    let before = subscriber.signals().len();
    sleep(Duration::from_millis(timeout_ms)).await;
    let after = subscriber.signals();
    assert_eq!(
        after.len(),
        before,
        "Unexpected signals emitted, expected no output: {:?}",
        &after[before.min(after.len())..]
    );
}
