// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::temp_info::TempInfo;
use reflow_rx::{IntoReflowError, Result, ResultExt, Source};

/// Source fetching a bounded number of readings for one town.
#[derive(Debug, Clone)]
pub struct TemperatureSource {
    town: String,
    remaining: usize,
    failure_rate: f64,
    rng: fastrand::Rng,
}

impl TemperatureSource {
    pub fn new(town: impl Into<String>, readings: usize, failure_rate: f64) -> Self {
        Self::with_rng(town, readings, failure_rate, fastrand::Rng::new())
    }

    /// Same as [`new`](Self::new) with a caller-provided generator, for reproducible feeds.
    pub fn with_rng(
        town: impl Into<String>,
        readings: usize,
        failure_rate: f64,
        rng: fastrand::Rng,
    ) -> Self {
        Self {
            town: town.into(),
            remaining: readings,
            failure_rate,
            rng,
        }
    }
}

impl Source for TemperatureSource {
    type Item = TempInfo;

    fn produce(&mut self) -> Result<Option<TempInfo>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let reading = TempInfo::fetch(&self.town, self.failure_rate, &mut self.rng)
            .map_err(IntoReflowError::into_reflow)
            .with_context(|| format!("fetching {}", self.town))?;
        self.remaining -= 1;
        Ok(Some(reading))
    }

    fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
