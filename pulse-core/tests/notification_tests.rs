// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Notification, PulseError};

#[test]
fn test_accessors() {
    assert!(Notification::OnNext(1).is_next());
    assert!(Notification::<i32>::OnComplete.is_complete());
    assert!(Notification::<i32>::OnError(PulseError::stream_error("boom")).is_error());
}

#[test]
fn test_into_next_discards_terminals() {
    assert_eq!(Notification::OnNext(42).into_next(), Some(42));
    assert_eq!(Notification::<i32>::OnComplete.into_next(), None);
    assert_eq!(
        Notification::<i32>::OnError(PulseError::stream_error("boom")).into_next(),
        None
    );
}

#[test]
fn test_map_transforms_only_elements() {
    let mapped = Notification::OnNext(21).map(|x| x * 2);
    assert_eq!(mapped, Notification::OnNext(42));

    let complete = Notification::<i32>::OnComplete.map(|x| x * 2);
    assert!(complete.is_complete());

    let error = Notification::<i32>::OnError(PulseError::stream_error("boom")).map(|x| x * 2);
    assert!(error.is_error());
}

#[test]
fn test_equality_semantics() {
    assert_eq!(Notification::OnNext(1), Notification::OnNext(1));
    assert_ne!(Notification::OnNext(1), Notification::OnNext(2));
    assert_eq!(
        Notification::<i32>::OnComplete,
        Notification::<i32>::OnComplete
    );

    // Errors are never equal, not even to themselves
    let a = Notification::<i32>::OnError(PulseError::stream_error("boom"));
    let b = Notification::<i32>::OnError(PulseError::stream_error("boom"));
    assert_ne!(a, b);
}

#[test]
fn test_into_error_extracts_failure() {
    let error = Notification::<i32>::OnError(PulseError::stream_error("boom"));
    assert!(error.into_error().is_some());
    assert!(Notification::OnNext(1).into_error().is_none());
}
