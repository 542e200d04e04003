// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that discards the first n elements of a stream.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Subscriber};

struct SkipObserver<A> {
    downstream: Subscriber<A>,
    remaining: usize,
    terminated: bool,
}

impl<A: Send + 'static> Observer for SkipObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        if self.remaining > 0 {
            // Inside the drop window the element is acknowledged
            // immediately without touching downstream.
            self.remaining -= 1;
            return Ack::Continue;
        }
        self.downstream.on_next(elem)
    }

    fn on_complete(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.downstream.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.downstream.on_error(error);
    }
}

/// Extension trait providing the `skip` operator.
pub trait SkipExt: Observable + Sized {
    /// Drops the first `n` elements; everything after passes through
    /// unchanged, including the downstream acknowledgements.
    ///
    /// If the stream has fewer than `n` elements, nothing is emitted.
    fn skip(self, n: usize) -> impl Observable<Item = Self::Item> {
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                SkipObserver {
                    downstream,
                    remaining: n,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> SkipExt for O {}
