// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator that emits the first n elements, then completes.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Subscriber};

struct TakeObserver<A> {
    downstream: Subscriber<A>,
    remaining: usize,
    terminated: bool,
}

impl<A: Send + 'static> Observer for TakeObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        if self.remaining == 0 {
            // take(0): the window was empty before the first element.
            self.terminated = true;
            self.downstream.on_complete();
            return Ack::Stop;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.terminated = true;
            let _ack = self.downstream.on_next(elem);
            self.downstream.on_complete();
            return Ack::Stop;
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

/// Extension trait providing the `take` operator.
pub trait TakeExt: Observable + Sized {
    /// Emits the first `n` elements, completes downstream, and stops the
    /// source as soon as the window is exhausted.
    fn take(self, n: usize) -> impl Observable<Item = Self::Item> {
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                TakeObserver {
                    downstream,
                    remaining: n,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> TakeExt for O {}
