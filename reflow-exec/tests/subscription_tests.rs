// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflow_core::{Publisher, ReflowError, Result};
use reflow_exec::{SourcePublisher, SubscriptionConfig};
use reflow_test_utils::test_data::{new_york, new_york_readings};
use reflow_test_utils::{
    assert_no_signal_emitted, bounded_source, failing_source, CallCountingSource,
    CountingSource, RecordingSubscriber, Signal, INJECTED_ERROR, TIMEOUT,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_one_at_a_time_consumer_receives_bounded_sequence_then_completes() -> anyhow::Result<()>
{
    // Arrange
    let publisher = SourcePublisher::new(|| bounded_source(new_york_readings()));
    let subscriber = RecordingSubscriber::one_at_a_time();

    // Act
    publisher.subscribe(subscriber.clone());
    let signals = subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    let mut expected = vec![Signal::Subscribed];
    expected.extend(new_york_readings().into_iter().map(Signal::Next));
    expected.push(Signal::Complete);
    assert_eq!(signals, expected);
    assert_no_signal_emitted(&subscriber, 50).await;

    Ok(())
}

#[tokio::test]
async fn test_production_failure_terminates_with_single_error() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(|| failing_source(new_york_readings(), 3));
    let subscriber = RecordingSubscriber::one_at_a_time();

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_terminal(TIMEOUT).await;
    assert_no_signal_emitted(&subscriber, 50).await;

    // Assert
    assert_eq!(subscriber.values(), vec![new_york(32), new_york(50)]);
    let errors = subscriber.errors();
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ReflowError::ProductionError { .. }));
    assert!(errors[0].to_string().contains(INJECTED_ERROR));
    assert_eq!(subscriber.completions(), 0);

    // Terminal subscriptions ignore further demand
    subscriber.request(5);
    assert_no_signal_emitted(&subscriber, 50).await;

    Ok(())
}

#[tokio::test]
async fn test_zero_request_is_reported_as_error() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let subscriber = RecordingSubscriber::passive();
    publisher.subscribe(subscriber.clone());

    // Act
    subscriber.request(0);
    let signals = subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    assert_eq!(
        signals,
        vec![Signal::Subscribed, Signal::Error(ReflowError::invalid_demand(0))]
    );
    assert!(subscriber.values().is_empty());
    assert!(subscriber.errors()[0].is_protocol_violation());

    Ok(())
}

#[tokio::test]
async fn test_zero_request_after_items_terminates() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let subscriber = RecordingSubscriber::requesting(2);

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_signals(3, TIMEOUT).await;
    subscriber.request(0);
    subscriber.request(3);
    subscriber.wait_for_terminal(TIMEOUT).await;
    assert_no_signal_emitted(&subscriber, 50).await;

    // Assert
    assert_eq!(subscriber.values(), vec![1, 2]);
    assert_eq!(subscriber.errors().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_independent_subscriptions_do_not_share_sequences() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let first = RecordingSubscriber::requesting(3);
    let second = RecordingSubscriber::requesting(3);

    // Act
    publisher.subscribe(first.clone());
    publisher.subscribe(second.clone());
    first.wait_for_signals(4, TIMEOUT).await;
    second.wait_for_signals(4, TIMEOUT).await;

    // Assert
    assert_eq!(first.values(), vec![1, 2, 3]);
    assert_eq!(second.values(), vec![1, 2, 3]);
    assert!(!first.is_terminated());
    assert!(!second.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_no_items_without_demand() -> anyhow::Result<()> {
    // Arrange
    let (source, calls) = CallCountingSource::new(CountingSource::default());
    let source = parking_lot::Mutex::new(Some(source));
    let publisher = SourcePublisher::new(move || {
        source
            .lock()
            .take()
            .expect("publisher subscribed once in this test")
    });
    let subscriber = RecordingSubscriber::passive();

    // Act
    publisher.subscribe(subscriber.clone());
    assert_no_signal_emitted(&subscriber, 50).await;

    // Assert
    assert_eq!(subscriber.signals(), vec![Signal::Subscribed]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn test_requests_are_additive() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let subscriber = RecordingSubscriber::passive();
    publisher.subscribe(subscriber.clone());

    // Act
    subscriber.request(2);
    subscriber.request(3);
    subscriber.wait_for_signals(6, TIMEOUT).await;
    assert_no_signal_emitted(&subscriber, 50).await;

    // Assert
    assert_eq!(subscriber.values(), vec![1, 2, 3, 4, 5]);

    Ok(())
}

#[tokio::test]
async fn test_delivery_never_exceeds_requested_demand() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let subscriber = RecordingSubscriber::passive();
    publisher.subscribe(subscriber.clone());

    // Act & Assert
    let mut requested = 0;
    for n in [1_u64, 4, 2, 7] {
        subscriber.request(n);
        requested += n as usize;
        subscriber.wait_for_signals(requested + 1, TIMEOUT).await;
        assert_no_signal_emitted(&subscriber, 20).await;
        assert_eq!(subscriber.values().len(), requested);
    }

    let expected: Vec<u64> = (1..=requested as u64).collect();
    assert_eq!(subscriber.values(), expected);

    Ok(())
}

#[tokio::test]
async fn test_bounded_source_completes_after_last_item_without_extra_demand() -> anyhow::Result<()>
{
    // Arrange
    let (source, calls) = CallCountingSource::new(bounded_source(vec![1, 2, 3]));
    let source = parking_lot::Mutex::new(Some(source));
    let publisher = SourcePublisher::new(move || {
        source
            .lock()
            .take()
            .expect("publisher subscribed once in this test")
    });
    let subscriber = RecordingSubscriber::requesting(10);

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    assert_eq!(subscriber.values(), vec![1, 2, 3]);
    assert_eq!(subscriber.completions(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    Ok(())
}

#[tokio::test]
async fn test_empty_source_completes_on_first_request() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(|| bounded_source(Vec::<i32>::new()));
    let subscriber = RecordingSubscriber::requesting(1);

    // Act
    publisher.subscribe(subscriber.clone());
    let signals = subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    assert_eq!(signals, vec![Signal::Subscribed, Signal::Complete]);

    Ok(())
}

#[tokio::test]
async fn test_closure_source_exhaustion_completes_on_next_request() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(|| {
        let mut remaining = 2;
        move || -> Result<Option<&'static str>> {
            if remaining == 0 {
                return Ok(None);
            }
            remaining -= 1;
            Ok(Some("tick"))
        }
    });
    let subscriber = RecordingSubscriber::requesting(2);

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_signals(3, TIMEOUT).await;
    assert_no_signal_emitted(&subscriber, 50).await;
    subscriber.request(1);
    subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    assert_eq!(subscriber.values(), vec!["tick", "tick"]);
    assert_eq!(subscriber.completions(), 1);

    Ok(())
}

#[tokio::test]
async fn test_unbounded_demand_keeps_producing() -> anyhow::Result<()> {
    // Arrange
    let publisher = SourcePublisher::new(CountingSource::default);
    let subscriber = RecordingSubscriber::requesting(u64::MAX);

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_signals(101, TIMEOUT).await;
    subscriber.cancel();
    subscriber.wait_for_terminal(TIMEOUT).await;

    // Assert
    let values = subscriber.values();
    assert!(values.len() >= 100);
    assert!(values.windows(2).all(|pair| pair[1] == pair[0] + 1));
    assert_eq!(subscriber.completions(), 1);

    Ok(())
}

#[tokio::test]
async fn test_interval_paces_production() -> anyhow::Result<()> {
    // Arrange
    let config = SubscriptionConfig::default().with_interval(Duration::from_millis(30));
    let publisher = SourcePublisher::new(CountingSource::default).with_config(config);
    let subscriber = RecordingSubscriber::requesting(3);
    let started = tokio::time::Instant::now();

    // Act
    publisher.subscribe(subscriber.clone());
    subscriber.wait_for_signals(4, TIMEOUT).await;

    // Assert
    assert!(started.elapsed() >= Duration::from_millis(90));
    assert_eq!(subscriber.values(), vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_on_subscribe_precedes_every_item() -> anyhow::Result<()> {
    // Arrange
    let publisher = Arc::new(SourcePublisher::new(CountingSource::default));
    let subscribers: Vec<_> = (0..8).map(|_| RecordingSubscriber::requesting(2)).collect();

    // Act
    for subscriber in &subscribers {
        publisher.subscribe(subscriber.clone());
    }

    // Assert
    for subscriber in &subscribers {
        let signals = subscriber.wait_for_signals(3, TIMEOUT).await;
        assert_eq!(signals[0], Signal::Subscribed);
        assert_eq!(signals[1..], [Signal::Next(1), Signal::Next(2)]);
    }

    Ok(())
}
