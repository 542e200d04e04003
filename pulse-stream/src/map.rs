// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element-wise transformation operator.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

struct MapObserver<A, B> {
    downstream: Subscriber<B>,
    selector: Arc<dyn Fn(A) -> Result<B> + Send + Sync>,
    terminated: bool,
}

impl<A, B> Observer for MapObserver<A, B>
where
    A: Send + 'static,
    B: Send + 'static,
{
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        match (self.selector)(elem) {
            Ok(mapped) => self.downstream.on_next(mapped),
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

/// Extension trait providing the `map` operator.
pub trait MapExt: Observable + Sized {
    /// Transforms each element with a fallible selector.
    ///
    /// A selector error terminates the pipeline: downstream receives the
    /// error as `on_error` and upstream is answered with `Stop`.
    fn map<B, F>(self, selector: F) -> impl Observable<Item = B>
    where
        B: Send + 'static,
        F: Fn(Self::Item) -> Result<B> + Send + Sync + 'static,
    {
        let selector: Arc<dyn Fn(Self::Item) -> Result<B> + Send + Sync> = Arc::new(selector);
        LiftedObservable::new(self, move |downstream: Subscriber<B>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                MapObserver {
                    downstream,
                    selector: Arc::clone(&selector),
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> MapExt for O {}
