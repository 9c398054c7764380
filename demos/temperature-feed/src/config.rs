// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::time::Duration;

/// Complete feed configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TempFeedConfig {
    pub towns: Vec<String>,
    pub readings_per_town: usize,
    pub failure_rate: f64,
    pub interval_ms: u64,
    #[serde(default = "default_celsius")]
    pub celsius: bool,
    #[serde(default)]
    pub below_zero_only: bool,
}

const fn default_celsius() -> bool {
    true
}

impl TempFeedConfig {
    /// Load configuration from embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        Self::from_toml(include_str!("../config.toml"))
    }

    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
