// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Replays reified [`Notification`] values as protocol calls.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Notification, Observer, PulseError, Scheduler, Subscriber};

struct DematerializeObserver<A> {
    downstream: Subscriber<A>,
    terminated: bool,
}

impl<A: Send + 'static> Observer for DematerializeObserver<A> {
    type Item = Notification<A>;

    fn on_next(&mut self, elem: Notification<A>) -> Ack {
        if self.terminated {
            // Post-termination notifications are dropped, but an error
            // must not vanish silently.
            if let Notification::OnError(error) = elem {
                self.downstream.scheduler().report_failure(error);
            }
            return Ack::Stop;
        }
        match elem {
            Notification::OnNext(a) => self.downstream.on_next(a),
            Notification::OnError(error) => {
                self.terminated = true;
                self.downstream.on_error(error);
                Ack::Stop
            }
            Notification::OnComplete => {
                self.terminated = true;
                self.downstream.on_complete();
                Ack::Stop
            }
        }
    }

    fn on_complete(&mut self) {
        // Forwarded iff no inner terminal notification preceded it.
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.downstream.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        if self.terminated {
            self.downstream.scheduler().report_failure(error);
            return;
        }
        self.terminated = true;
        self.downstream.on_error(error);
    }
}

/// Extension trait providing the `dematerialize` operator.
pub trait DematerializeExt: Observable + Sized {
    /// The inverse of [`materialize`](crate::materialize::MaterializeExt::materialize):
    /// `OnNext` becomes an emission, `OnError` and `OnComplete` become the
    /// matching terminal event and stop the source.
    fn dematerialize<A>(self) -> impl Observable<Item = A>
    where
        Self: Observable<Item = Notification<A>>,
        A: Send + 'static,
    {
        LiftedObservable::new(self, move |downstream: Subscriber<A>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                DematerializeObserver {
                    downstream,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> DematerializeExt for O {}
