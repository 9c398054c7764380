// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated remote thermometer.

use std::{fmt, io};

/// Message of every simulated fetch failure.
pub const FETCH_ERROR: &str = "Error!";

/// One temperature reading for a town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempInfo {
    pub town: String,
    pub temp: i32,
}

impl TempInfo {
    pub fn new(town: impl Into<String>, temp: i32) -> Self {
        Self {
            town: town.into(),
            temp,
        }
    }

    /// Fetches a Fahrenheit reading in `0..100`, failing with probability `failure_rate`.
    pub fn fetch(town: &str, failure_rate: f64, rng: &mut fastrand::Rng) -> io::Result<Self> {
        if rng.f64() < failure_rate {
            return Err(io::Error::other(FETCH_ERROR));
        }
        Ok(Self::new(town, rng.i32(0..100)))
    }

    /// Converts a Fahrenheit reading to Celsius.
    #[must_use]
    pub fn to_celsius(self) -> Self {
        Self {
            temp: (self.temp - 32) * 5 / 9,
            ..self
        }
    }
}

impl fmt::Display for TempInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.town, self.temp)
    }
}
