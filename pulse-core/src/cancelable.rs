// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handle returned by `subscribe`.

use event_listener::Event;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation handle for a single subscription.
///
/// Cancellation is advisory and cooperative: [`cancel`](Cancelable::cancel)
/// raises a flag that producers poll at their scheduling boundaries (batch
/// edges and deferred-acknowledgement resumptions), so an in-flight
/// `on_next` may still complete before emission stops. Once the flag is
/// observed, no further events are delivered and any bracketed resources
/// are finalized.
///
/// Clones share the same state; the first `cancel()` wins and the rest
/// are no-ops.
///
/// # Example
///
/// ```
/// use pulse_core::Cancelable;
///
/// let handle = Cancelable::new();
/// assert!(!handle.is_canceled());
///
/// handle.cancel();
/// handle.cancel(); // idempotent
/// assert!(handle.is_canceled());
/// ```
#[derive(Clone, Debug)]
pub struct Cancelable {
    state: Arc<State>,
}

#[derive(Debug)]
struct State {
    canceled: AtomicBool,
    wakeups: Event,
}

impl Cancelable {
    /// A live handle; nothing is canceled yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(State {
                canceled: AtomicBool::new(false),
                wakeups: Event::new(),
            }),
        }
    }

    /// Severs the subscription.
    ///
    /// Idempotent: only the first call flips the flag and wakes waiters,
    /// later calls find it already set and do nothing.
    pub fn cancel(&self) {
        if !self.state.canceled.swap(true, Ordering::AcqRel) {
            self.state.wakeups.notify(usize::MAX);
        }
    }

    /// The check producers run at their scheduling boundaries.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.state.canceled.load(Ordering::Acquire)
    }

    /// Waits until some handle cancels the subscription.
    ///
    /// Returns immediately if that already happened.
    pub async fn canceled(&self) {
        while !self.is_canceled() {
            let listener = self.state.wakeups.listen();
            // The flag may have flipped between the check and listen();
            // the notification fired then and would never reach us.
            if self.is_canceled() {
                return;
            }
            listener.await;
        }
    }
}

impl Default for Cancelable {
    fn default() -> Self {
        Self::new()
    }
}
