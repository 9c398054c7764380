// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

/// Callback receiving every value a cell publishes.
pub type CellCallback<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Named cell holding its last value and pushing every update to its subscribers.
///
/// Propagation is synchronous: `on_next` runs every subscriber callback on the
/// caller's thread before returning, in subscription order. There is no queue
/// and no demand; a cell network is a plain call graph.
///
/// Concurrent writers are not serialized against each other. The mutexes only
/// keep the state memory-safe, so two threads writing into one network may
/// observe interleaved propagation.
///
/// A network containing a cycle recurses until the stack overflows.
///
/// ```
/// use reflow_cell::SimpleCell;
///
/// let a = SimpleCell::new("A", 0);
/// let c = SimpleCell::new("C", 0);
/// a.subscribe_cell(&c);
///
/// a.on_next(10);
/// assert_eq!(c.value(), 10);
/// ```
pub struct SimpleCell<T> {
    name: String,
    value: Mutex<T>,
    subscribers: Mutex<Vec<CellCallback<T>>>,
}

impl<T> SimpleCell<T>
where
    T: Clone + fmt::Display + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, initial: T) -> Arc<Self> {
        Arc::new(Self::detached(name, initial))
    }

    pub(crate) fn detached(name: impl Into<String>, initial: T) -> Self {
        Self {
            name: name.into(),
            value: Mutex::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> T {
        self.value.lock().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Registers `callback` for every value published from now on.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.subscribers.lock().push(Arc::new(callback));
    }

    /// Forwards every value published from now on into `target`.
    ///
    /// Only a weak reference to `target` is kept; once it is dropped the
    /// forwarding silently stops.
    pub fn subscribe_cell(&self, target: &Arc<Self>) {
        let target: Weak<Self> = Arc::downgrade(target);
        self.subscribe(move |value| {
            if let Some(target) = target.upgrade() {
                target.on_next(value);
            }
        });
    }

    /// Stores `value` and pushes it to every subscriber.
    pub fn on_next(&self, value: T) {
        *self.value.lock() = value.clone();
        info!("{}: {}", self.name, value);

        // Snapshot first so callbacks may subscribe to this cell without deadlocking
        let subscribers = self.subscribers.lock().clone();
        for subscriber in subscribers {
            subscriber(value.clone());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCell")
            .field("name", &self.name)
            .field("value", &*self.value.lock())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}
