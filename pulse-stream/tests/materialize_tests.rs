// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod common;

use common::source_of;
use pulse_core::{Cancelable, Notification, Observer, PulseError, Subscriber};
use pulse_stream::prelude::*;
use pulse_test_utils::{RecordingObserver, TestScheduler};

#[test]
fn test_materialize_reifies_events_into_elements() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2]).materialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: the terminal event travels as a regular element
    assert_eq!(
        events.items(),
        vec![
            Notification::OnNext(1),
            Notification::OnNext(2),
            Notification::OnComplete,
        ]
    );
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_materialize_carries_failure_as_element_then_completes() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1])
        .map(|_| Err::<i32, _>(PulseError::stream_error("source failed")))
        .materialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert: the materialized stream itself never errors
    let items = events.items();
    assert_eq!(items.len(), 1);
    assert!(items[0].is_error());
    assert!(events.is_completed());
    assert!(events.error().is_none());
    scheduler.assert_quiescent();
}

#[test]
fn test_dematerialize_replays_notifications() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![
        Notification::OnNext(1),
        Notification::OnNext(2),
        Notification::OnComplete,
    ])
    .dematerialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![1, 2]);
    assert!(events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_dematerialize_error_notification_stops_the_source() {
    // Arrange: elements after the reified error must never surface
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![
        Notification::OnNext(1),
        Notification::OnError(PulseError::stream_error("reified failure")),
        Notification::OnNext(2),
    ])
    .dematerialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![1]);
    assert!(events.error().is_some());
    assert!(!events.is_completed());
    scheduler.assert_quiescent();
}

#[test]
fn test_materialize_then_dematerialize_is_identity() {
    // Arrange
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = source_of(vec![1, 2, 3]).materialize().dematerialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![1, 2, 3]);
    assert!(events.is_completed());
    assert!(scheduler.failures().is_empty());
    scheduler.assert_quiescent();
}

/// A producer that pushes every notification regardless of the
/// acknowledgements it receives.
struct PushAll {
    notifications: Vec<Notification<i32>>,
}

impl Observable for PushAll {
    type Item = Notification<i32>;

    fn unsafe_subscribe(&self, mut subscriber: Subscriber<Notification<i32>>) -> Cancelable {
        for notification in self.notifications.clone() {
            let _ack = subscriber.on_next(notification);
        }
        Cancelable::new()
    }
}

#[test]
fn test_post_termination_error_notification_goes_to_failure_sink() {
    // Arrange: the error notification arrives after completion already
    // terminated the stream; it must be reported, not delivered
    let scheduler = TestScheduler::new();
    let (observer, events) = RecordingObserver::new();
    let pipeline = PushAll {
        notifications: vec![
            Notification::OnNext(1),
            Notification::OnComplete,
            Notification::OnError(PulseError::stream_error("too late")),
        ],
    }
    .dematerialize();

    // Act
    let _cancelable = pipeline.subscribe_with(observer, scheduler.to_ref());
    scheduler.run();

    // Assert
    assert_eq!(events.items(), vec![1]);
    assert!(events.is_completed());
    assert!(events.error().is_none());
    assert_eq!(scheduler.failures().len(), 1);
    scheduler.assert_quiescent();
}
