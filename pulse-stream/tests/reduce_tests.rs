// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::source_of;
use pulse_core::PulseError;
use pulse_stream::prelude::*;
use pulse_test_utils::{RecordingObserver, TestScheduler};

#[test]
fn test_reduce_over_empty_source_completes_without_value() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(Vec::<i32>::new()).reduce(|a, b| Ok(a + b));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), Vec::<i32>::new());
    assert!(events.is_completed());
    assert!(scheduler.failures().is_empty());
    scheduler.assert_quiescent();
}

#[test]
fn test_reduce_over_single_element_emits_nothing() {
    // Arrange: one element never exercises the reducer
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![42]).reduce(|a, b| Ok(a + b));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: completion only
    assert_eq!(events.items(), Vec::<i32>::new());
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_reduce_sums_multiple_elements() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3, 4]).reduce(|a, b| Ok(a + b));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![10]);
    assert!(events.is_completed());
    assert!(scheduler.failures().is_empty());
    scheduler.assert_quiescent();
}

#[test]
fn test_reducer_error_terminates_with_on_error() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3])
        .reduce(|_, _| Err::<i32, _>(PulseError::stream_error("reducer blew up")));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: nothing was emitted, the failure arrived in-band
    assert_eq!(events.items(), Vec::<i32>::new());
    assert!(!events.is_completed());
    assert!(events.error().is_some());
    assert!(scheduler.failures().is_empty());
    scheduler.assert_quiescent();
}

#[test]
fn test_upstream_error_is_forwarded_once() {
    // Arrange: the source fails during acquisition of the third element
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2])
        .map(|x| {
            if x == 2 {
                Err(PulseError::stream_error("source failed"))
            } else {
                Ok(x)
            }
        })
        .reduce(|a, b| Ok(a + b));

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert!(events.error().is_some());
    assert!(!events.is_completed());
    scheduler.assert_quiescent();
}
