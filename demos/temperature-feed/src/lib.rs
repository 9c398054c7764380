// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Temperature feed demo
//!
//! Every configured town gets its own demand-driven feed. A `TempSubscriber`
//! asks for one reading at a time, readings are converted to Celsius on the
//! way, and each feed ends with either `Done!` or the fetch error that
//! stopped it.

pub mod config;
pub mod feed;
pub mod source;
pub mod subscriber;
pub mod temp_info;

pub use config::TempFeedConfig;
pub use feed::{run, temperatures, TempPublisher};
pub use source::TemperatureSource;
pub use subscriber::{FeedEnd, FeedOutcome, TempSubscriber};
pub use temp_info::{TempInfo, FETCH_ERROR};
