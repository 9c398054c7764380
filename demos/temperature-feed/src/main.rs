// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::{Context, Result};
use temperature_feed::{run, FeedEnd, TempFeedConfig};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = TempFeedConfig::load().context("invalid embedded config.toml")?;
    info!(
        "Starting temperature feed for {} towns, {} readings each",
        config.towns.len(),
        config.readings_per_town
    );

    let outcomes = run(&config).await?;

    for outcome in &outcomes {
        match &outcome.end {
            FeedEnd::Completed => info!(
                "{}: {} readings, completed",
                outcome.town,
                outcome.readings.len()
            ),
            FeedEnd::Failed(reason) => warn!(
                "{}: {} readings, failed with {}",
                outcome.town,
                outcome.readings.len(),
                reason
            ),
        }
    }

    Ok(())
}
