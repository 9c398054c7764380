// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reading fixtures shared by the workspace tests.

use std::fmt;

/// A sensor reading tagged with the place it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reading {
    pub source: String,
    pub value: i32,
}

impl Reading {
    pub fn new(source: impl Into<String>, value: i32) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.value)
    }
}

pub fn new_york(value: i32) -> Reading {
    Reading::new("New York", value)
}

pub fn chicago(value: i32) -> Reading {
    Reading::new("Chicago", value)
}

/// Five Fahrenheit readings from New York, in production order.
pub fn new_york_readings() -> Vec<Reading> {
    [32, 50, 68, 86, 212].into_iter().map(new_york).collect()
}

/// Three Fahrenheit readings from Chicago, in production order.
pub fn chicago_readings() -> Vec<Reading> {
    [14, 23, 41].into_iter().map(chicago).collect()
}
