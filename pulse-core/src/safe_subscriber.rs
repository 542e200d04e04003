// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Contract-enforcing subscriber wrapper.

use crate::ack::{Ack, Decision};
use crate::error::PulseError;
use crate::observer::Observer;
use crate::scheduler::Scheduler;
use crate::subscriber::Subscriber;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A wrapper protecting a downstream subscriber against producer
/// misbehaviour.
///
/// It enforces the observer grammar on behalf of the wrapped subscriber:
/// events arriving after a terminal event, or after the subscriber itself
/// answered `Stop`, are suppressed. A terminal `on_error` that can no
/// longer be delivered is diverted to the scheduler's failure sink so it
/// is never silently lost.
///
/// Deferred-acknowledgement failures pass through unchanged; routing them
/// into `on_error` is the producer's responsibility, and this wrapper will
/// still be open to deliver that `on_error` when it arrives.
///
/// Applied automatically by the safe `subscribe` path. Trusted builders
/// use the unsafe path and skip the wrapping.
pub struct SafeSubscriber<A> {
    downstream: Subscriber<A>,
    terminated: bool,
    stopped: Arc<AtomicBool>,
}

impl<A: Send + 'static> SafeSubscriber<A> {
    /// Wraps a subscriber, returning a subscriber enforcing the contract
    /// on the original's behalf.
    #[must_use]
    pub fn wrap(downstream: Subscriber<A>) -> Subscriber<A> {
        let scheduler = downstream.scheduler().clone();
        Subscriber::new(
            Self {
                downstream,
                terminated: false,
                stopped: Arc::new(AtomicBool::new(false)),
            },
            scheduler,
        )
    }

    fn is_done(&self) -> bool {
        self.terminated || self.stopped.load(Ordering::Acquire)
    }
}

impl<A: Send + 'static> Observer for SafeSubscriber<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.is_done() {
            return Ack::Stop;
        }
        match self.downstream.on_next(elem) {
            Ack::Continue => Ack::Continue,
            Ack::Stop => {
                self.terminated = true;
                Ack::Stop
            }
            Ack::Deferred(future) => {
                // Record a deferred Stop so late events are suppressed even
                // though the producer resolves the acknowledgement itself.
                let stopped = Arc::clone(&self.stopped);
                Ack::deferred(async move {
                    let resolution = future.await;
                    if matches!(resolution, Ok(Decision::Stop)) {
                        stopped.store(true, Ordering::Release);
                    }
                    resolution
                })
            }
        }
    }

    fn on_complete(&mut self) {
        if self.is_done() {
            return;
        }
        self.terminated = true;
        self.downstream.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        if self.is_done() {
            self.downstream.scheduler().report_failure(error);
            return;
        }
        self.terminated = true;
        self.downstream.on_error(error);
    }
}
