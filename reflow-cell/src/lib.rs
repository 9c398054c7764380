// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synchronous chained cells.
//!
//! The push-only counterpart of the demand-driven protocol in `reflow-exec`:
//! a cell stores each value it receives and hands it straight to its
//! subscribers on the same thread, like spreadsheet cells referencing each
//! other.
//!
//! ```text
//! A ──set_left──► C = A + B ──► subscribers of C
//! B ──set_right─┘
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod arithmetic;
pub mod simple;

pub use arithmetic::ArithmeticCell;
pub use simple::{CellCallback, SimpleCell};
