// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer that records every event it receives.
//!
//! The acknowledgement answered for each element is scripted through an
//! [`AckPlan`], which is how tests exercise the back-pressure paths:
//! stopping after k elements, failing on a specific element, or parking
//! the producer on manually resolved acknowledgements.

use futures::future;
use parking_lot::Mutex;
use pulse_core::{Ack, AckPromise, Decision, Observer, PulseError};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// One event as seen by the recording observer.
#[derive(Debug, Clone)]
pub enum RecordedEvent<A> {
    /// `on_next` with the element
    Next(A),
    /// `on_complete`
    Complete,
    /// `on_error` with the error
    Error(PulseError),
}

/// Shared read handle over everything a [`RecordingObserver`] received.
pub struct RecordedEvents<A> {
    events: Arc<Mutex<Vec<RecordedEvent<A>>>>,
}

impl<A> Clone for RecordedEvents<A> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<A> RecordedEvents<A> {
    /// Total number of recorded events, terminals included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// `true` when nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Number of `on_next` events received.
    #[must_use]
    pub fn next_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, RecordedEvent::Next(_)))
            .count()
    }

    /// `true` when `on_complete` was received.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|event| matches!(event, RecordedEvent::Complete))
    }

    /// The recorded terminal error, if any.
    #[must_use]
    pub fn error(&self) -> Option<PulseError> {
        self.events.lock().iter().find_map(|event| match event {
            RecordedEvent::Error(error) => Some(error.clone()),
            _ => None,
        })
    }

    /// `true` once either terminal event was received.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.is_completed() || self.error().is_some()
    }

    /// Polls until a terminal event arrives, for subscriptions running on
    /// a real runtime.
    ///
    /// # Panics
    ///
    /// Panics if no terminal event arrives within the timeout.
    pub async fn wait_terminal(&self, timeout_ms: u64) {
        tokio::time::timeout(Duration::from_millis(timeout_ms), async {
            loop {
                if self.is_terminated() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("no terminal event within timeout");
    }
}

impl<A: Clone> RecordedEvents<A> {
    /// All recorded events, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecordedEvent<A>> {
        self.events.lock().clone()
    }

    /// The elements received through `on_next`, in order.
    #[must_use]
    pub fn items(&self) -> Vec<A> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::Next(elem) => Some(elem.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Manually resolved acknowledgements handed out by
/// [`AckPlan::Deferred`], in emission order.
#[derive(Clone, Default)]
pub struct PendingAcks {
    promises: Arc<Mutex<VecDeque<AckPromise>>>,
}

impl PendingAcks {
    /// A fresh, empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unresolved acknowledgements.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.promises.lock().len()
    }

    /// Resolves the oldest outstanding acknowledgement. Returns `false`
    /// when none is outstanding.
    pub fn resolve_next(&self, decision: Decision) -> bool {
        match self.promises.lock().pop_front() {
            Some(promise) => {
                promise.complete(decision);
                true
            }
            None => false,
        }
    }

    /// Fails the oldest outstanding acknowledgement. Returns `false`
    /// when none is outstanding.
    pub fn fail_next(&self, error: PulseError) -> bool {
        match self.promises.lock().pop_front() {
            Some(promise) => {
                promise.fail(error);
                true
            }
            None => false,
        }
    }

    fn push(&self, promise: AckPromise) {
        self.promises.lock().push_back(promise);
    }
}

/// Scripted acknowledgement behaviour of a [`RecordingObserver`].
#[derive(Clone)]
pub enum AckPlan {
    /// Answer `Continue` to everything.
    ContinueAll,
    /// Answer `Continue` until the given 1-based element, which is
    /// answered `Stop`.
    StopAt(usize),
    /// Answer the given 1-based element with a failed deferred
    /// acknowledgement, simulating a consumer failing on that element.
    FailAt(usize, String),
    /// Answer every element with a deferred acknowledgement resolved
    /// manually through the queue.
    Deferred(PendingAcks),
}

/// An [`Observer`] recording events for later assertions.
pub struct RecordingObserver<A> {
    events: Arc<Mutex<Vec<RecordedEvent<A>>>>,
    plan: AckPlan,
    seen: usize,
}

impl<A: Send + 'static> RecordingObserver<A> {
    /// An observer acknowledging every element with `Continue`.
    #[must_use]
    pub fn new() -> (Self, RecordedEvents<A>) {
        Self::with_plan(AckPlan::ContinueAll)
    }

    /// An observer following the given acknowledgement script.
    #[must_use]
    pub fn with_plan(plan: AckPlan) -> (Self, RecordedEvents<A>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let handle = RecordedEvents {
            events: Arc::clone(&events),
        };
        (
            Self {
                events,
                plan,
                seen: 0,
            },
            handle,
        )
    }
}

impl<A: Send + 'static> Observer for RecordingObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        self.events.lock().push(RecordedEvent::Next(elem));
        self.seen += 1;
        match &self.plan {
            AckPlan::ContinueAll => Ack::Continue,
            AckPlan::StopAt(index) => {
                if self.seen >= *index {
                    Ack::Stop
                } else {
                    Ack::Continue
                }
            }
            AckPlan::FailAt(index, message) => {
                if self.seen == *index {
                    Ack::deferred(future::ready(Err(PulseError::stream_error(
                        message.clone(),
                    ))))
                } else {
                    Ack::Continue
                }
            }
            AckPlan::Deferred(acks) => {
                let (promise, ack) = Ack::pending();
                acks.push(promise);
                ack
            }
        }
    }

    fn on_complete(&mut self) {
        self.events.lock().push(RecordedEvent::Complete);
    }

    fn on_error(&mut self, error: PulseError) {
        self.events.lock().push(RecordedEvent::Error(error));
    }
}
