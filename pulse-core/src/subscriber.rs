// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! An observer bound to the scheduling context its subscription runs on.

use crate::ack::Ack;
use crate::error::PulseError;
use crate::observer::{BoxObserver, Observer};
use crate::scheduler::SchedulerRef;

/// An [`Observer`] paired with the [`Scheduler`](crate::Scheduler) where
/// any work needed to resolve its deferred acknowledgements runs.
///
/// Operators wrap subscribers: given a downstream `Subscriber<B>`, an
/// operator produces an upstream-facing `Subscriber<A>` that carries the
/// same scheduler.
pub struct Subscriber<A> {
    observer: BoxObserver<A>,
    scheduler: SchedulerRef,
}

impl<A> Subscriber<A> {
    /// Binds an observer to a scheduler.
    pub fn new<O>(observer: O, scheduler: SchedulerRef) -> Self
    where
        O: Observer<Item = A> + 'static,
    {
        Self {
            observer: Box::new(observer),
            scheduler,
        }
    }

    /// The scheduling context of this subscription.
    pub fn scheduler(&self) -> &SchedulerRef {
        &self.scheduler
    }
}

impl<A> Observer for Subscriber<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        self.observer.on_next(elem)
    }

    fn on_complete(&mut self) {
        self.observer.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        self.observer.on_error(error);
    }
}
