// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::Cancelable;
use std::time::Duration;

#[test]
fn test_new_handle_is_not_canceled() {
    let handle = Cancelable::new();
    assert!(!handle.is_canceled());
}

#[test]
fn test_cancel_is_idempotent() {
    // Arrange
    let handle = Cancelable::new();

    // Act
    handle.cancel();
    handle.cancel();
    handle.cancel();

    // Assert
    assert!(handle.is_canceled());
}

#[test]
fn test_clones_share_cancellation_state() {
    let handle = Cancelable::new();
    let clone = handle.clone();

    clone.cancel();

    assert!(handle.is_canceled());
    assert!(clone.is_canceled());
}

#[tokio::test]
async fn test_canceled_wait_unblocks_on_cancel() -> anyhow::Result<()> {
    // Arrange
    let handle = Cancelable::new();
    let waiter = handle.clone();
    let task = tokio::spawn(async move {
        waiter.canceled().await;
    });

    // Act
    tokio::time::sleep(Duration::from_millis(10)).await;
    handle.cancel();

    // Assert: the waiter unblocks
    tokio::time::timeout(Duration::from_millis(500), task).await??;
    Ok(())
}

#[tokio::test]
async fn test_canceled_wait_returns_immediately_when_already_canceled() {
    let handle = Cancelable::new();
    handle.cancel();

    // Must not hang
    tokio::time::timeout(Duration::from_millis(100), handle.canceled())
        .await
        .expect("already canceled handle should return immediately");
}
