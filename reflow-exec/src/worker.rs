// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background worker handle with cooperative cancellation.

use reflow_core::CancellationToken;
use std::future::Future;

/// Handle to a spawned worker that cancels it on drop.
///
/// The spawned future receives a [`CancellationToken`] and is expected to stop
/// at its next checkpoint once the token fires. Dropping or cancelling the
/// handle never aborts the future mid-item.
///
/// # Example
///
/// ```rust
/// use reflow_exec::WorkerTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = WorkerTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct WorkerTask {
    cancel: CancellationToken,
}

impl WorkerTask {
    /// Spawns `f` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signals the worker to stop. Returns `true` for the first call only.
    pub fn cancel(&self) -> bool {
        self.cancel.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for WorkerTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
