// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Wires one temperature feed per town.
//!
//! ```text
//! TemperatureSource ──► [map: to_celsius] ──► [filter: below zero] ──► TempSubscriber
//! ```

use crate::config::TempFeedConfig;
use crate::source::TemperatureSource;
use crate::subscriber::{FeedOutcome, TempSubscriber};
use crate::temp_info::TempInfo;
use anyhow::Context;
use reflow_rx::prelude::*;
use tracing::info;

/// Type-erased publisher of one town's readings.
pub type TempPublisher = Box<dyn Publisher<TempInfo> + Send + Sync>;

/// Builds the publisher for `town` with the stages `config` asks for.
pub fn temperatures(town: &str, config: &TempFeedConfig) -> TempPublisher {
    let town = town.to_owned();
    let readings = config.readings_per_town;
    let failure_rate = config.failure_rate;
    let source = SourcePublisher::new(move || {
        TemperatureSource::new(town.clone(), readings, failure_rate)
    })
    .with_config(SubscriptionConfig::default().with_interval(config.interval()));

    match (config.celsius, config.below_zero_only) {
        (false, false) => Box::new(source),
        (false, true) => Box::new(source.filter(is_below_zero)),
        (true, false) => Box::new(source.map(TempInfo::to_celsius)),
        (true, true) => Box::new(source.map(TempInfo::to_celsius).filter(is_below_zero)),
    }
}

fn is_below_zero(reading: &TempInfo) -> bool {
    reading.temp < 0
}

/// Subscribes every configured town and waits until all feeds ended.
pub async fn run(config: &TempFeedConfig) -> anyhow::Result<Vec<FeedOutcome>> {
    let mut pending = Vec::with_capacity(config.towns.len());
    for town in &config.towns {
        info!("subscribing to {}", town);
        let (subscriber, outcome) = TempSubscriber::new(town.as_str());
        temperatures(town, config).subscribe(subscriber);
        pending.push((town, outcome));
    }

    let mut outcomes = Vec::with_capacity(pending.len());
    for (town, outcome) in pending {
        let outcome = outcome
            .await
            .with_context(|| format!("feed for {town} ended without a terminal signal"))?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
