// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Left-associative reduction without an identity element.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

struct ReduceObserver<A> {
    downstream: Subscriber<A>,
    reducer: Arc<dyn Fn(A, A) -> Result<A> + Send + Sync>,
    state: Option<A>,
    applied: bool,
    terminated: bool,
}

impl<A: Send + 'static> Observer for ReduceObserver<A> {
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        match self.state.take() {
            None => self.state = Some(elem),
            Some(current) => match (self.reducer)(current, elem) {
                Ok(next) => {
                    self.state = Some(next);
                    self.applied = true;
                }
                Err(error) => {
                    self.terminated = true;
                    self.downstream.on_error(error);
                    return Ack::Stop;
                }
            },
        }
        Ack::Continue
    }

    fn on_complete(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        // A source with fewer than two elements never exercised the
        // reducer, so there is nothing to emit.
        if self.applied {
            if let Some(state) = self.state.take() {
                let _ack = self.downstream.on_next(state);
            }
        }
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

/// Extension trait providing the `reduce` operator.
pub trait ReduceExt: Observable + Sized {
    /// Emits the left-associative fold of all elements once the source
    /// completes, provided the reducer was applied at least once.
    ///
    /// Sources with zero or one element emit nothing: a single element is
    /// not enough to observe an application of the reducer. For a fold
    /// with an identity element, see
    /// [`fold`](crate::fold::FoldExt::fold).
    fn reduce<F>(self, reducer: F) -> impl Observable<Item = Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Result<Self::Item> + Send + Sync + 'static,
    {
        let reducer: Arc<dyn Fn(Self::Item, Self::Item) -> Result<Self::Item> + Send + Sync> =
            Arc::new(reducer);
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                ReduceObserver {
                    downstream,
                    reducer: Arc::clone(&reducer),
                    state: None,
                    applied: false,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> ReduceExt for O {}
