// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::source_of;
use pulse_core::PulseError;
use pulse_stream::prelude::*;
use pulse_test_utils::{RecordingObserver, TestScheduler};

#[test]
fn test_identity_key_suppresses_consecutive_duplicates() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 1, 2, 2, 3, 1, 1])
        .distinct_until_changed_by_key(|x| Ok(*x), |a, b| a == b);

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: non-consecutive repeats pass through
    assert_eq!(events.items(), vec![1, 2, 3, 1]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_key_projection_decides_equivalence() {
    // Arrange: parity as the key
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 3, 5, 2, 4, 3])
        .distinct_until_changed_by_key(|x| Ok(*x % 2), |a, b| a == b);

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: one element per parity run
    assert_eq!(events.items(), vec![1, 2, 3]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_custom_equivalence_relation() {
    // Arrange: case-insensitive comparison, not PartialEq
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![
        "hello".to_string(),
        "HELLO".to_string(),
        "world".to_string(),
    ])
    .distinct_until_changed_by_key(
        |s: &String| Ok(s.clone()),
        |a: &String, b: &String| a.eq_ignore_ascii_case(b),
    );

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec!["hello".to_string(), "world".to_string()]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_key_selector_error_terminates_with_on_error() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).distinct_until_changed_by_key(
        |x| {
            if *x == 2 {
                Err(PulseError::stream_error("key blew up"))
            } else {
                Ok(*x)
            }
        },
        |a, b| a == b,
    );

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![1]);
    assert!(events.error().is_some());
    assert!(!events.is_completed());
    scheduler.assert_quiescent();
}
