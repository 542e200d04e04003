// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-bounded prefix of a stream.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

struct TakeWhileObserver<A> {
    downstream: Subscriber<A>,
    predicate: Arc<dyn Fn(&A) -> Result<bool> + Send + Sync>,
    inclusive: bool,
    terminated: bool,
}

impl<A: Send + 'static> Observer for TakeWhileObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        match (self.predicate)(&elem) {
            Ok(true) => self.downstream.on_next(elem),
            Ok(false) => {
                self.terminated = true;
                if self.inclusive {
                    // The boundary element is the last emission; completion
                    // follows it unconditionally.
                    let _ack = self.downstream.on_next(elem);
                }
                self.downstream.on_complete();
                Ack::Stop
            }
            Err(error) => {
                self.terminated = true;
                self.downstream.on_error(error);
                Ack::Stop
            }
        }
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

/// Extension trait providing the `take_while` operator.
pub trait TakeWhileExt: Observable + Sized {
    /// Emits elements while the predicate holds; the first rejected
    /// element completes the stream and stops the source.
    ///
    /// With `inclusive` set, the rejected element itself is emitted
    /// before completion.
    fn take_while<F>(self, predicate: F, inclusive: bool) -> impl Observable<Item = Self::Item>
    where
        F: Fn(&Self::Item) -> Result<bool> + Send + Sync + 'static,
    {
        let predicate: Arc<dyn Fn(&Self::Item) -> Result<bool> + Send + Sync> =
            Arc::new(predicate);
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                TakeWhileObserver {
                    downstream,
                    predicate: Arc::clone(&predicate),
                    inclusive,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> TakeWhileExt for O {}
