// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Predicate-based element filtering.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

struct FilterObserver<A> {
    downstream: Subscriber<A>,
    predicate: Arc<dyn Fn(&A) -> Result<bool> + Send + Sync>,
    terminated: bool,
}

impl<A: Send + 'static> Observer for FilterObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        match (self.predicate)(&elem) {
            // A dropped element is acknowledged on the spot; demand for the
            // next one is unaffected by downstream.
            Ok(false) => Ack::Continue,
            Ok(true) => self.downstream.on_next(elem),
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

/// Extension trait providing the `filter` operator.
pub trait FilterExt: Observable + Sized {
    /// Keeps only the elements the fallible predicate accepts.
    fn filter<F>(self, predicate: F) -> impl Observable<Item = Self::Item>
    where
        F: Fn(&Self::Item) -> Result<bool> + Send + Sync + 'static,
    {
        let predicate: Arc<dyn Fn(&Self::Item) -> Result<bool> + Send + Sync> =
            Arc::new(predicate);
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                FilterObserver {
                    downstream,
                    predicate: Arc::clone(&predicate),
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> FilterExt for O {}
