// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::simple::SimpleCell;
use parking_lot::Mutex;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

/// Cell publishing `left + right` whenever one of its operands changes.
///
/// ```
/// use reflow_cell::{ArithmeticCell, SimpleCell};
///
/// let a = SimpleCell::new("A", 0);
/// let b = SimpleCell::new("B", 0);
/// let c = ArithmeticCell::<i32>::new("C");
///
/// a.subscribe(c.left_input());
/// b.subscribe(c.right_input());
///
/// a.on_next(10);
/// b.on_next(20);
/// a.on_next(15);
/// assert_eq!(c.value(), 35);
/// ```
pub struct ArithmeticCell<T> {
    cell: SimpleCell<T>,
    operands: Mutex<(T, T)>,
}

impl<T> ArithmeticCell<T>
where
    T: Add<Output = T> + Clone + Default + fmt::Display + Send + Sync + 'static,
{
    /// Creates a cell with both operands at `T::default()`.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            cell: SimpleCell::detached(name, T::default()),
            operands: Mutex::new((T::default(), T::default())),
        })
    }

    pub fn name(&self) -> &str {
        self.cell.name()
    }

    /// Last published sum.
    pub fn value(&self) -> T {
        self.cell.value()
    }

    pub fn set_left(&self, left: T) {
        let sum = {
            let mut operands = self.operands.lock();
            operands.0 = left;
            operands.0.clone() + operands.1.clone()
        };
        self.cell.on_next(sum);
    }

    pub fn set_right(&self, right: T) {
        let sum = {
            let mut operands = self.operands.lock();
            operands.1 = right;
            operands.0.clone() + operands.1.clone()
        };
        self.cell.on_next(sum);
    }

    /// Callback feeding the left operand, ready for [`SimpleCell::subscribe`].
    pub fn left_input(self: &Arc<Self>) -> impl Fn(T) + Send + Sync + 'static {
        let cell = Arc::clone(self);
        move |value| cell.set_left(value)
    }

    /// Callback feeding the right operand, ready for [`SimpleCell::subscribe`].
    pub fn right_input(self: &Arc<Self>) -> impl Fn(T) + Send + Sync + 'static {
        let cell = Arc::clone(self);
        move |value| cell.set_right(value)
    }

    /// Registers `callback` for every sum published from now on.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.cell.subscribe(callback);
    }

    /// Forwards every sum published from now on into `target`.
    pub fn subscribe_cell(&self, target: &Arc<SimpleCell<T>>) {
        self.cell.subscribe_cell(target);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArithmeticCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArithmeticCell")
            .field("cell", &self.cell)
            .field("operands", &*self.operands.lock())
            .finish()
    }
}
