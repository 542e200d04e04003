// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::source_of;
use pulse_core::PulseError;
use pulse_stream::prelude::*;
use pulse_test_utils::{RecordingObserver, TestScheduler};

#[test]
fn test_fold_over_empty_source_emits_identity() {
    // Arrange: unlike reduce, the identity makes an empty source meaningful
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(Vec::<i32>::new()).fold(|| Ok(0), |acc, x| Ok(acc + x));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![0]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_fold_accumulates_into_single_final_state() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).fold(|| Ok(10), |acc, x| Ok(acc + x));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: a single emission on completion
    assert_eq!(events.items(), vec![16]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_fold_can_change_the_element_type() {
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).fold(
        || Ok(String::new()),
        |mut acc: String, x: i32| {
            acc.push_str(&x.to_string());
            Ok(acc)
        },
    );

    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    assert_eq!(events.items(), vec!["123".to_string()]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_failing_initial_state_fails_the_subscription_immediately() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).fold(
        || Err::<i32, _>(PulseError::stream_error("no seed")),
        |acc, x| Ok(acc + x),
    );

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());

    // Assert: the failure is delivered without the source ever starting
    assert!(events.error().is_some());
    assert_eq!(events.items(), Vec::<i32>::new());
    scheduler.assert_quiescent();
}

#[test]
fn test_folder_error_terminates_with_on_error() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).fold(
        || Ok(0),
        |acc, x| {
            if x == 2 {
                Err(PulseError::stream_error("folder blew up"))
            } else {
                Ok(acc + x)
            }
        },
    );

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), Vec::<i32>::new());
    assert!(events.error().is_some());
    assert!(!events.is_completed());
    scheduler.assert_quiescent();
}
