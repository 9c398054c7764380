// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the reflow workspace.
//!
//! Designed for tests only, not for production code.
//!
//! # Key Types
//!
//! - [`RecordingSubscriber`]: records every [`Signal`] and drives demand,
//!   either by hand or through a [`RequestPolicy`].
//! - [`BoundedSource`], [`CountingSource`]: deterministic sources.
//! - [`ErrorInjectingSource`]: fails a chosen production call.
//! - [`CallCountingSource`]: observes how often a source was called.
//! - [`test_data`]: `Reading` fixtures.
//!
//! # Example
//!
//! ```rust
//! use reflow_core::Source;
//! use reflow_test_utils::failing_source;
//!
//! let mut source = failing_source([1, 2, 3], 2);
//! assert_eq!(source.produce().unwrap(), Some(1));
//! assert!(source.produce().is_err());
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recording;
pub mod sources;
pub mod test_data;

pub use helpers::{assert_no_signal_emitted, TIMEOUT};
pub use recording::{RecordingSubscriber, RequestPolicy, Signal};
pub use sources::{
    bounded_source, failing_source, BoundedSource, CallCountingSource, CountingSource,
    ErrorInjectingSource, INJECTED_ERROR,
};
pub use test_data::Reading;
