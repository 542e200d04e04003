// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The subscribe-on-demand producer abstraction.

use pulse_core::{Cancelable, Observer, SafeSubscriber, SchedulerRef, Subscriber};
use std::marker::PhantomData;

/// A cold producer of a sequence of elements terminating in at most one
/// completion or error event.
///
/// Subscribing attaches a [`Subscriber`] and begins production; the
/// returned [`Cancelable`] is exclusively owned by the caller and, once
/// canceled, severs further emission. Each subscription owns its own
/// per-subscription state; observables themselves are shareable.
pub trait Observable: Send + Sync {
    /// The element type this observable produces.
    type Item: Send + 'static;

    /// Attaches a subscriber without any contract enforcement.
    ///
    /// The caller vouches that the subscriber honours the observer
    /// grammar even against a misbehaving producer. Library operators use
    /// this path internally; everyone else wants [`subscribe`].
    ///
    /// [`subscribe`]: Observable::subscribe
    fn unsafe_subscribe(&self, subscriber: Subscriber<Self::Item>) -> Cancelable;

    /// Attaches a subscriber, shielding it behind a
    /// [`SafeSubscriber`] that enforces the observer grammar.
    fn subscribe(&self, subscriber: Subscriber<Self::Item>) -> Cancelable {
        self.unsafe_subscribe(SafeSubscriber::wrap(subscriber))
    }

    /// Convenience for [`subscribe`] taking the observer and scheduler
    /// separately.
    ///
    /// [`subscribe`]: Observable::subscribe
    fn subscribe_with<O>(&self, observer: O, scheduler: SchedulerRef) -> Cancelable
    where
        O: Observer<Item = Self::Item> + 'static,
    {
        self.subscribe(Subscriber::new(observer, scheduler))
    }
}

/// An observable obtained by lifting an operator over a source.
///
/// The operator is a `Subscriber<B> -> Subscriber<A>` transformation,
/// applied once per subscription: given the downstream subscriber it
/// instantiates the operator's per-subscription state and hands the
/// upstream-facing view to the source.
pub struct LiftedObservable<S, OpF, B> {
    source: S,
    operator: OpF,
    _out: PhantomData<fn() -> B>,
}

impl<S, OpF, B> LiftedObservable<S, OpF, B> {
    pub(crate) fn new(source: S, operator: OpF) -> Self {
        Self {
            source,
            operator,
            _out: PhantomData,
        }
    }
}

impl<S, OpF, B> Observable for LiftedObservable<S, OpF, B>
where
    S: Observable,
    OpF: Fn(Subscriber<B>) -> Subscriber<S::Item> + Send + Sync,
    B: Send + 'static,
{
    type Item = B;

    fn unsafe_subscribe(&self, subscriber: Subscriber<B>) -> Cancelable {
        self.source.unsafe_subscribe((self.operator)(subscriber))
    }
}
