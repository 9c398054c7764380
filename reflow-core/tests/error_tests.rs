// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflow_core::{IntoReflowError, ReflowError, Result, ResultExt};
use std::io;

#[test]
fn test_error_display() {
    let err = ReflowError::production_error("sensor offline");
    assert_eq!(err.to_string(), "Production error: sensor offline");

    let err = ReflowError::invalid_demand(0);
    assert_eq!(
        err.to_string(),
        "Invalid demand: requested 0 items, demand must be positive"
    );

    let err = ReflowError::transform_error("negative kelvin");
    assert_eq!(err.to_string(), "Transform error: negative kelvin");
}

#[test]
fn test_protocol_violation_classification() {
    assert!(ReflowError::invalid_demand(0).is_protocol_violation());
    assert!(!ReflowError::production_error("boom").is_protocol_violation());
    assert!(!ReflowError::user_error(io::Error::other("boom")).is_protocol_violation());
}

#[test]
fn test_result_context_wraps_user_errors() {
    let result: Result<()> = Err(ReflowError::UserError("disk full".into()));

    let err = result.context("reading sensor").unwrap_err();
    assert!(matches!(err, ReflowError::ProductionError { .. }));
    assert!(err.to_string().contains("reading sensor"));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn test_result_context_preserves_protocol_errors() {
    let result: Result<()> = Err(ReflowError::invalid_demand(0));

    let err = result.with_context(|| "ignored".to_string()).unwrap_err();
    assert!(matches!(err, ReflowError::InvalidDemand { requested: 0 }));
}

#[test]
fn test_result_context_ok() {
    let result: Result<i32> = Ok(42);
    assert_eq!(result.context("unused").unwrap(), 42);
}

#[test]
fn test_into_reflow_error_adds_context() {
    let err = io::Error::other("timeout").into_reflow_error("fetching New York");

    assert!(matches!(err, ReflowError::ProductionError { .. }));
    assert_eq!(err.to_string(), "Production error: fetching New York: timeout");
}

#[test]
fn test_into_reflow_keeps_source() {
    let err = io::Error::other("timeout").into_reflow();

    assert!(matches!(err, ReflowError::UserError(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_clone_flattens_user_error() {
    let err = ReflowError::user_error(io::Error::other("timeout"));

    let cloned = err.clone();
    assert!(matches!(cloned, ReflowError::ProductionError { .. }));
    assert!(cloned.to_string().contains("timeout"));
}

#[test]
fn test_clone_keeps_demand() {
    let cloned = ReflowError::invalid_demand(0).clone();
    assert!(matches!(cloned, ReflowError::InvalidDemand { requested: 0 }));
}
