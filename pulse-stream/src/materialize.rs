// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reifies stream events into [`Notification`] values.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Notification, Observer, PulseError, Subscriber};

struct MaterializeObserver<A> {
    downstream: Subscriber<Notification<A>>,
    terminated: bool,
}

impl<A: Send + 'static> Observer for MaterializeObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        self.downstream.on_next(Notification::OnNext(elem))
    }

    fn on_complete(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        let _ack = self.downstream.on_next(Notification::OnComplete);
        self.downstream.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        // The failure is carried as a regular element; the materialized
        // stream itself always completes successfully.
        let _ack = self.downstream.on_next(Notification::OnError(error));
        self.downstream.on_complete();
    }
}

/// Extension trait providing the `materialize` operator.
pub trait MaterializeExt: Observable + Sized {
    /// Turns each event into a [`Notification`] element. The resulting
    /// stream never errors: failures travel as `OnError` elements,
    /// followed by completion.
    fn materialize(self) -> impl Observable<Item = Notification<Self::Item>> {
        LiftedObservable::new(
            self,
            move |downstream: Subscriber<Notification<Self::Item>>| {
                let scheduler = downstream.scheduler().clone();
                Subscriber::new(
                    MaterializeObserver {
                        downstream,
                        terminated: false,
                    },
                    scheduler,
                )
            },
        )
    }
}

impl<O: Observable + Sized> MaterializeExt for O {}
