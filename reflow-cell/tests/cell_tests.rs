// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use reflow_cell::{ArithmeticCell, SimpleCell};
use std::sync::Arc;
use std::thread;

fn collector<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(T) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |value| sink.lock().push(value))
}

#[test]
fn test_on_next_stores_value_and_notifies_before_returning() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let (seen, callback) = collector::<i32>();
    a.subscribe(callback);

    // Act
    a.on_next(10);

    // Assert
    assert_eq!(a.value(), 10);
    assert_eq!(*seen.lock(), vec![10]);

    Ok(())
}

#[test]
fn test_subscribers_are_notified_in_subscription_order() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0_i64);
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = order.clone();
        a.subscribe(move |value| order.lock().push((tag, value)));
    }

    // Act
    a.on_next(7);

    // Assert
    assert_eq!(*order.lock(), vec![("first", 7), ("second", 7), ("third", 7)]);
    assert_eq!(a.subscriber_count(), 3);

    Ok(())
}

#[test]
fn test_late_subscriber_sees_only_later_values() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    a.on_next(1);
    let (seen, callback) = collector::<i32>();

    // Act
    a.subscribe(callback);
    a.on_next(2);

    // Assert
    assert_eq!(*seen.lock(), vec![2]);

    Ok(())
}

#[test]
fn test_cell_chain_propagates_synchronously() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let b = SimpleCell::new("B", 0);
    let c = SimpleCell::new("C", 0);
    a.subscribe_cell(&b);
    b.subscribe_cell(&c);

    // Act
    a.on_next(10);

    // Assert
    assert_eq!((a.value(), b.value(), c.value()), (10, 10, 10));

    Ok(())
}

#[test]
fn test_unrelated_cell_is_not_touched() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let b = SimpleCell::new("B", 0);
    let c = SimpleCell::new("C", 0);
    a.subscribe_cell(&c);

    // Act
    a.on_next(10);
    b.on_next(20);

    // Assert
    assert_eq!(c.value(), 10);

    Ok(())
}

#[test]
fn test_forwarding_stops_once_target_is_dropped() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let c = SimpleCell::new("C", 0);
    a.subscribe_cell(&c);
    drop(c);

    // Act
    a.on_next(5);

    // Assert
    assert_eq!(a.value(), 5);
    assert_eq!(a.subscriber_count(), 1);

    Ok(())
}

#[test]
fn test_arithmetic_cell_recomputes_on_each_operand() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let b = SimpleCell::new("B", 0);
    let c = ArithmeticCell::<i32>::new("C");
    let (sums, callback) = collector::<i32>();
    a.subscribe(c.left_input());
    b.subscribe(c.right_input());
    c.subscribe(callback);

    // Act
    a.on_next(10);
    b.on_next(20);
    a.on_next(15);

    // Assert
    assert_eq!(*sums.lock(), vec![10, 30, 35]);
    assert_eq!(c.value(), 35);
    assert_eq!(c.name(), "C");

    Ok(())
}

#[test]
fn test_arithmetic_cell_feeds_downstream_cell() -> anyhow::Result<()> {
    // Arrange
    let c = ArithmeticCell::<f64>::new("C");
    let d = SimpleCell::new("D", 0.0_f64);
    c.subscribe_cell(&d);

    // Act
    c.set_left(1.5);
    c.set_right(2.25);

    // Assert
    assert!((d.value() - 3.75).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_callback_may_subscribe_to_its_own_cell() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0);
    let weak = Arc::downgrade(&a);
    a.subscribe(move |_| {
        if let Some(a) = weak.upgrade() {
            a.subscribe(|_| {});
        }
    });

    // Act
    a.on_next(1);

    // Assert
    assert_eq!(a.subscriber_count(), 2);

    Ok(())
}

#[test]
fn test_concurrent_writers_leave_cell_in_a_written_state() -> anyhow::Result<()> {
    // Arrange
    let a = SimpleCell::new("A", 0_i64);
    let (seen, callback) = collector::<i64>();
    a.subscribe(callback);

    // Act
    let writers: Vec<_> = (1..=4)
        .map(|n| {
            let a = a.clone();
            thread::spawn(move || a.on_next(n))
        })
        .collect();
    for writer in writers {
        writer.join().map_err(|_| anyhow::anyhow!("writer panicked"))?;
    }

    // Assert
    let mut seen = seen.lock().clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert!((1..=4).contains(&a.value()));

    Ok(())
}
